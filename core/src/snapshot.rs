// SPDX-License-Identifier: MIT OR Apache-2.0

//! Snapshot serialization for game state
//!
//! This module provides functions for serializing and deserializing a
//! complete game state: CBOR for compact storage and transport, JSON for
//! web-facing consumers. A restored snapshot is equal to the original,
//! field for field.

use crate::GameState;

/// Serialize game state to CBOR
pub fn to_cbor(state: &GameState) -> Vec<u8> {
    match serde_cbor::to_vec(state) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::error!("Failed to serialize game state: {}", err);
            Vec::new() // Return empty vector on error
        }
    }
}

/// Deserialize game state from CBOR
pub fn from_cbor(data: &[u8]) -> Option<GameState> {
    if data.is_empty() {
        return None;
    }

    match serde_cbor::from_slice(data) {
        Ok(state) => Some(state),
        Err(err) => {
            tracing::error!("Failed to deserialize game state: {}", err);
            None
        }
    }
}

/// Serialize game state to JSON
pub fn to_json(state: &GameState) -> String {
    match serde_json::to_string(state) {
        Ok(json) => json,
        Err(err) => {
            tracing::error!("Failed to serialize game state to JSON: {}", err);
            String::new()
        }
    }
}

/// Deserialize game state from JSON
pub fn from_json(data: &str) -> Option<GameState> {
    if data.is_empty() {
        return None;
    }

    match serde_json::from_str(data) {
        Ok(state) => Some(state),
        Err(err) => {
            tracing::error!("Failed to deserialize game state from JSON: {}", err);
            None
        }
    }
}
