// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile record stored in the `profiles` table.
//!
//! Column names follow the table schema (`nome`, `descricao`, `foto`).

use serde::{Deserialize, Serialize};

/// Profile as read back from the table (`select=nome,descricao,foto`).
///
/// Any column may be null; callers fall back to empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Profile {
    #[serde(rename = "nome", default)]
    pub name: Option<String>,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    /// Public URL of the stored photo
    #[serde(rename = "foto", default)]
    pub photo: Option<String>,
}

/// Full-row write, replacing whatever is stored under `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileUpsert {
    /// Account ID of the session owner
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "foto")]
    pub photo: Option<String>,
}
