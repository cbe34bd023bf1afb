//! Length-prefixed grid frames for hosts across a foreign boundary
//!
//! Layout: `width: u32 LE`, `height: u32 LE`, `len: u32 LE`, then `len`
//! row-major cell bytes (0 or 1).

use crate::engine::{GridEngine, ALIVE, DEAD};
use crate::error::EngineError;
use serde::{Deserialize, Serialize};

pub const HEADER_LEN: usize = 12;

/// A snapshot of the grid with its dimensions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridFrame {
    pub width: usize,
    pub height: usize,
    pub generation: u64,
    pub cells: Vec<u8>,
}

impl GridFrame {
    /// Copy the engine's current state
    pub fn capture(engine: &GridEngine) -> Self {
        let (width, height) = engine.dimensions();
        Self {
            width,
            height,
            generation: engine.generation(),
            cells: engine
                .buffer()
                .iter()
                .map(|&cell| if cell == DEAD { DEAD } else { ALIVE })
                .collect(),
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        let too_large = || EngineError::InvalidDimensions {
            width: self.width,
            height: self.height,
        };
        let width = u32::try_from(self.width).map_err(|_| too_large())?;
        let height = u32::try_from(self.height).map_err(|_| too_large())?;
        let len = u32::try_from(self.cells.len()).map_err(|_| too_large())?;

        let mut bytes = Vec::with_capacity(HEADER_LEN + self.cells.len());
        bytes.extend_from_slice(&width.to_le_bytes());
        bytes.extend_from_slice(&height.to_le_bytes());
        bytes.extend_from_slice(&len.to_le_bytes());
        bytes.extend_from_slice(&self.cells);
        Ok(bytes)
    }

    /// Parse and validate a frame. The generation is not carried on the wire.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        if bytes.len() < HEADER_LEN {
            return Err(EngineError::MalformedFrame(format!(
                "expected at least {} header bytes, got {}",
                HEADER_LEN,
                bytes.len()
            )));
        }

        let width = read_u32(bytes, 0) as usize;
        let height = read_u32(bytes, 4) as usize;
        let len = read_u32(bytes, 8) as usize;
        let body = &bytes[HEADER_LEN..];

        if width.checked_mul(height) != Some(len) || len == 0 {
            return Err(EngineError::MalformedFrame(format!(
                "length {} does not match {}x{}",
                len, width, height
            )));
        }
        if body.len() != len {
            return Err(EngineError::MalformedFrame(format!(
                "expected {} cell bytes, got {}",
                len,
                body.len()
            )));
        }
        if let Some(pos) = body.iter().position(|&cell| cell > ALIVE) {
            return Err(EngineError::MalformedFrame(format!(
                "invalid cell value {} at offset {}",
                body[pos], pos
            )));
        }

        Ok(Self {
            width,
            height,
            generation: 0,
            cells: body.to_vec(),
        })
    }

    /// Bulk-write this frame's cells into the engine's live buffer
    pub fn apply_to(&self, engine: &mut GridEngine) -> Result<(), EngineError> {
        let (width, height) = engine.dimensions();
        if (self.width, self.height) != (width, height) {
            return Err(EngineError::DimensionMismatch {
                frame_width: self.width,
                frame_height: self.height,
                width,
                height,
            });
        }
        if self.cells.len() != width * height {
            return Err(EngineError::MalformedFrame(format!(
                "expected {} cell bytes, got {}",
                width * height,
                self.cells.len()
            )));
        }
        engine.raw_buffer_view().copy_from_slice(&self.cells);
        Ok(())
    }
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&bytes[offset..offset + 4]);
    u32::from_le_bytes(word)
}
