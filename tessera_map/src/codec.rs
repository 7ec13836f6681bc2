// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binary map format.
//!
//! All integers and floats are little-endian.
//!
//! | Field          | Size             | Notes                                |
//! |----------------|------------------|--------------------------------------|
//! | magic          | 4                | [`MAGIC`], the bytes `MaP!`          |
//! | width          | 4                | `i32`                                |
//! | height         | 4                | `i32`                                |
//! | name length    | 1                | `u8`                                 |
//! | author length  | 1                | `u8`                                 |
//! | name           | name length      | not null-terminated                  |
//! | author         | author length    | not null-terminated                  |
//! | block count    | 4                | `i32`                                |
//! | blocks         | 16 × block count | `f32 x, f32 y, f32 angle, i32 id`    |

use std::io::{Cursor, Read, Write};

use tracing::debug;

use crate::block::Block;
use crate::document::MapInfo;
use crate::error::CodecError;

/// File magic, `MaP!` when written little-endian.
pub const MAGIC: u32 = 0x2150_614D;

/// Size of one serialized block.
pub const BLOCK_RECORD_LEN: usize = 16;

/// Longest name or author the one-byte length prefix can describe.
pub const MAX_TEXT_LEN: usize = u8::MAX as usize;

/// Decoded contents of a map file.
#[derive(Clone, Debug, PartialEq)]
pub struct MapData {
    /// Dimensions, name, and author.
    pub info: MapInfo,
    /// Blocks in file order.
    pub blocks: Vec<Block>,
}

/// Serialize metadata and blocks, in iteration order.
pub fn encode<'a>(
    info: &MapInfo,
    blocks: impl IntoIterator<Item = &'a Block>,
) -> Result<Vec<u8>, CodecError> {
    let name = text_field("name", &info.name)?;
    let author = text_field("author", &info.author)?;

    let mut out = Vec::with_capacity(18 + name.len() + author.len());
    out.extend_from_slice(&MAGIC.to_le_bytes());
    out.extend_from_slice(&info.width.to_le_bytes());
    out.extend_from_slice(&info.height.to_le_bytes());
    out.push(len_byte(name));
    out.push(len_byte(author));
    out.extend_from_slice(name);
    out.extend_from_slice(author);

    // Count is patched in once the blocks are written.
    let count_at = out.len();
    out.extend_from_slice(&0_i32.to_le_bytes());
    let mut count: usize = 0;
    for b in blocks {
        out.extend_from_slice(&b.x.to_le_bytes());
        out.extend_from_slice(&b.y.to_le_bytes());
        out.extend_from_slice(&b.angle.to_le_bytes());
        out.extend_from_slice(&b.id.to_le_bytes());
        count += 1;
    }
    let count = i32::try_from(count)
        .map_err(|_| CodecError::Corrupt(format!("{count} blocks do not fit the block count")))?;
    out[count_at..count_at + 4].copy_from_slice(&count.to_le_bytes());
    Ok(out)
}

/// Serialize into a writer.
pub fn write_to<'a, W: Write>(
    writer: &mut W,
    info: &MapInfo,
    blocks: impl IntoIterator<Item = &'a Block>,
) -> Result<(), CodecError> {
    let bytes = encode(info, blocks)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Parse a complete map file.
///
/// The magic is checked before anything else is read or allocated.
pub fn decode(data: &[u8]) -> Result<MapData, CodecError> {
    let mut cursor = Cursor::new(data);

    let magic = read_u32(&mut cursor, "magic")?;
    if magic != MAGIC {
        return Err(CodecError::BadMagic {
            found: magic,
            expected: MAGIC,
        });
    }

    let width = read_i32(&mut cursor, "width")?;
    let height = read_i32(&mut cursor, "height")?;
    let name_len = read_u8(&mut cursor, "name length")?;
    let author_len = read_u8(&mut cursor, "author length")?;
    let name = read_text(&mut cursor, usize::from(name_len), "name")?;
    let author = read_text(&mut cursor, usize::from(author_len), "author")?;

    let count = read_i32(&mut cursor, "block count")?;
    let count = usize::try_from(count)
        .map_err(|_| CodecError::Corrupt(format!("negative block count {count}")))?;
    let left = remaining(&cursor);
    if count.saturating_mul(BLOCK_RECORD_LEN) > left {
        return Err(CodecError::Truncated { field: "blocks" });
    }

    let mut blocks = Vec::with_capacity(count);
    for _ in 0..count {
        blocks.push(Block {
            x: read_f32(&mut cursor, "block x")?,
            y: read_f32(&mut cursor, "block y")?,
            angle: read_f32(&mut cursor, "block angle")?,
            id: read_i32(&mut cursor, "block id")?,
        });
    }

    let trailing = remaining(&cursor);
    if trailing > 0 {
        debug!(trailing, "ignoring bytes after the last block");
    }

    Ok(MapData {
        info: MapInfo {
            width,
            height,
            name,
            author,
        },
        blocks,
    })
}

/// Read a whole map from a reader.
pub fn read_from<R: Read>(reader: &mut R) -> Result<MapData, CodecError> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    decode(&data)
}

fn text_field<'a>(field: &'static str, text: &'a str) -> Result<&'a [u8], CodecError> {
    let bytes = text.as_bytes();
    if bytes.len() > MAX_TEXT_LEN {
        return Err(CodecError::FieldTooLong {
            field,
            len: bytes.len(),
        });
    }
    Ok(bytes)
}

fn len_byte(bytes: &[u8]) -> u8 {
    u8::try_from(bytes.len()).unwrap_or(u8::MAX)
}

fn remaining(cursor: &Cursor<&[u8]>) -> usize {
    let len = cursor.get_ref().len();
    let pos = usize::try_from(cursor.position()).unwrap_or(len);
    len.saturating_sub(pos)
}

// ============================================================================
// Byte reading helpers
// ============================================================================

fn read_exact<const N: usize>(
    cursor: &mut Cursor<&[u8]>,
    field: &'static str,
) -> Result<[u8; N], CodecError> {
    let mut buf = [0_u8; N];
    cursor
        .read_exact(&mut buf)
        .map_err(|_| CodecError::Truncated { field })?;
    Ok(buf)
}

fn read_u32(cursor: &mut Cursor<&[u8]>, field: &'static str) -> Result<u32, CodecError> {
    read_exact(cursor, field).map(u32::from_le_bytes)
}

fn read_i32(cursor: &mut Cursor<&[u8]>, field: &'static str) -> Result<i32, CodecError> {
    read_exact(cursor, field).map(i32::from_le_bytes)
}

fn read_f32(cursor: &mut Cursor<&[u8]>, field: &'static str) -> Result<f32, CodecError> {
    read_exact(cursor, field).map(f32::from_le_bytes)
}

fn read_u8(cursor: &mut Cursor<&[u8]>, field: &'static str) -> Result<u8, CodecError> {
    read_exact::<1>(cursor, field).map(|[b]| b)
}

fn read_text(
    cursor: &mut Cursor<&[u8]>,
    len: usize,
    field: &'static str,
) -> Result<String, CodecError> {
    let mut buf = vec![0_u8; len];
    cursor
        .read_exact(&mut buf)
        .map_err(|_| CodecError::Truncated { field })?;
    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}
