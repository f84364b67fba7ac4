//! Minimal FITS primary-HDU reader for pixel comparison.
//!
//! Reads just enough of the FITS standard to answer one question: do
//! two files hold the same image? A FITS file is a sequence of
//! 2880-byte blocks; the header is 80-byte keyword cards up to `END`,
//! the data follow at the next block boundary as big-endian integers
//! or floats per `BITPIX`, scaled by `BSCALE`/`BZERO`.
//!
//! Extensions, tables, and random groups are out of scope — only the
//! primary array is read.

use std::fs;
use std::path::Path;
use thiserror::Error;

const BLOCK_SIZE: usize = 2880;
const CARD_SIZE: usize = 80;
const CARDS_PER_BLOCK: usize = BLOCK_SIZE / CARD_SIZE;

#[derive(Debug, Error)]
pub enum FitsError {
    #[error("not a FITS file: {0}")]
    NotFits(String),

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("invalid BITPIX value: {0}")]
    InvalidBitPix(i64),

    #[error("data truncated: expected {expected} bytes, got {got}")]
    TruncatedData { expected: usize, got: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FitsResult<T> = Result<T, FitsError>;

/// Pixel storage type, as encoded by the `BITPIX` card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitPix {
    U8 = 8,
    I16 = 16,
    I32 = 32,
    I64 = 64,
    F32 = -32,
    F64 = -64,
}

impl BitPix {
    pub fn from_value(value: i64) -> Option<Self> {
        match value {
            8 => Some(Self::U8),
            16 => Some(Self::I16),
            32 => Some(Self::I32),
            64 => Some(Self::I64),
            -32 => Some(Self::F32),
            -64 => Some(Self::F64),
            _ => None,
        }
    }

    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::I16 => 2,
            Self::I32 | Self::F32 => 4,
            Self::I64 | Self::F64 => 8,
        }
    }
}

/// Decoded primary HDU: axis lengths and physical pixel values.
#[derive(Debug, Clone)]
pub struct PrimaryHdu {
    pub bitpix: BitPix,
    /// Axis lengths in `NAXIS1..NAXISn` order. Empty for a headerless
    /// (`NAXIS = 0`) primary HDU.
    pub shape: Vec<usize>,
    /// Pixel values with `BSCALE`/`BZERO` applied, in file order.
    pub data: Vec<f64>,
}

/// Reads and decodes the primary HDU of a FITS file.
pub fn read_primary(path: &Path) -> FitsResult<PrimaryHdu> {
    let bytes = fs::read(path)?;
    parse_primary(&bytes)
}

/// True if the two files hold identical pixels.
///
/// Identical means equal axis lengths and elementwise equality of the
/// physical (scaled) values. A NaN anywhere makes the comparison false,
/// matching array-equality conventions. Files with different `BITPIX`
/// but equal values compare identical.
pub fn fits_pixels_identical(a: &Path, b: &Path) -> FitsResult<bool> {
    let hdu_a = read_primary(a)?;
    let hdu_b = read_primary(b)?;

    if hdu_a.shape != hdu_b.shape {
        return Ok(false);
    }
    Ok(hdu_a
        .data
        .iter()
        .zip(hdu_b.data.iter())
        .all(|(x, y)| x == y))
}

struct Header {
    bitpix: BitPix,
    shape: Vec<usize>,
    bscale: f64,
    bzero: f64,
    data_start: usize,
}

fn parse_primary(bytes: &[u8]) -> FitsResult<PrimaryHdu> {
    let header = parse_header(bytes)?;

    let n_pixels: usize = if header.shape.is_empty() {
        0
    } else {
        header.shape.iter().product()
    };
    let n_bytes = n_pixels * header.bitpix.bytes_per_pixel();
    let available = bytes.len().saturating_sub(header.data_start);
    if available < n_bytes {
        return Err(FitsError::TruncatedData {
            expected: n_bytes,
            got: available,
        });
    }

    let raw = &bytes[header.data_start..header.data_start + n_bytes];
    let data = decode_pixels(raw, header.bitpix, n_pixels, header.bscale, header.bzero);

    Ok(PrimaryHdu {
        bitpix: header.bitpix,
        shape: header.shape,
        data,
    })
}

fn parse_header(bytes: &[u8]) -> FitsResult<Header> {
    if bytes.len() < BLOCK_SIZE {
        return Err(FitsError::NotFits(format!(
            "file is {} bytes, smaller than one FITS block",
            bytes.len()
        )));
    }

    let first = card_at(bytes, 0);
    if keyword_of(first) != "SIMPLE" || card_value(first).as_deref() != Some("T") {
        return Err(FitsError::NotFits(
            "missing SIMPLE = T in the first card".to_string(),
        ));
    }

    let mut bitpix: Option<BitPix> = None;
    let mut naxis: Option<usize> = None;
    let mut axis_lengths: Vec<Option<usize>> = Vec::new();
    let mut bscale = 1.0;
    let mut bzero = 0.0;

    let mut card_index = 0;
    loop {
        if (card_index * CARD_SIZE) + CARD_SIZE > bytes.len() {
            return Err(FitsError::InvalidHeader("no END card".to_string()));
        }
        let card = card_at(bytes, card_index);
        let keyword = keyword_of(card);

        if keyword == "END" {
            break;
        }

        match keyword.as_str() {
            "BITPIX" => {
                let v = int_value(card, "BITPIX")?;
                bitpix = Some(BitPix::from_value(v).ok_or(FitsError::InvalidBitPix(v))?);
            }
            "NAXIS" => {
                let v = int_value(card, "NAXIS")?;
                if v < 0 {
                    return Err(FitsError::InvalidHeader(format!("NAXIS = {}", v)));
                }
                naxis = Some(v as usize);
                axis_lengths.resize(v as usize, None);
            }
            k if k.starts_with("NAXIS") => {
                let axis: usize = k[5..]
                    .parse()
                    .map_err(|_| FitsError::InvalidHeader(format!("bad axis keyword {:?}", k)))?;
                let v = int_value(card, k)?;
                if axis == 0 || v < 0 {
                    return Err(FitsError::InvalidHeader(format!("{} = {}", k, v)));
                }
                if axis_lengths.len() < axis {
                    axis_lengths.resize(axis, None);
                }
                axis_lengths[axis - 1] = Some(v as usize);
            }
            "BSCALE" => bscale = float_value(card, "BSCALE")?,
            "BZERO" => bzero = float_value(card, "BZERO")?,
            _ => {}
        }

        card_index += 1;
    }

    let bitpix = bitpix.ok_or_else(|| FitsError::InvalidHeader("missing BITPIX".to_string()))?;
    let naxis = naxis.ok_or_else(|| FitsError::InvalidHeader("missing NAXIS".to_string()))?;

    let mut shape = Vec::with_capacity(naxis);
    for (i, len) in axis_lengths.iter().take(naxis).enumerate() {
        shape.push(len.ok_or_else(|| {
            FitsError::InvalidHeader(format!("missing NAXIS{}", i + 1))
        })?);
    }

    // header occupies whole blocks; data begin at the next boundary
    let header_blocks = (card_index / CARDS_PER_BLOCK) + 1;
    Ok(Header {
        bitpix,
        shape,
        bscale,
        bzero,
        data_start: header_blocks * BLOCK_SIZE,
    })
}

fn card_at(bytes: &[u8], index: usize) -> &[u8] {
    let start = index * CARD_SIZE;
    &bytes[start..start + CARD_SIZE]
}

fn keyword_of(card: &[u8]) -> String {
    String::from_utf8_lossy(&card[..8]).trim_end().to_string()
}

/// The value field of a `KEYWORD = value / comment` card, trimmed.
fn card_value(card: &[u8]) -> Option<String> {
    let rest = card.get(10..)?;
    let text = String::from_utf8_lossy(rest);
    let value = match text.find('/') {
        Some(pos) => &text[..pos],
        None => &text[..],
    };
    Some(value.trim().to_string())
}

fn int_value(card: &[u8], keyword: &str) -> FitsResult<i64> {
    card_value(card)
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| FitsError::InvalidHeader(format!("unparseable {} value", keyword)))
}

fn float_value(card: &[u8], keyword: &str) -> FitsResult<f64> {
    card_value(card)
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| FitsError::InvalidHeader(format!("unparseable {} value", keyword)))
}

fn decode_pixels(raw: &[u8], bitpix: BitPix, n_pixels: usize, bscale: f64, bzero: f64) -> Vec<f64> {
    let mut data = Vec::with_capacity(n_pixels);
    let step = bitpix.bytes_per_pixel();
    for chunk in raw.chunks_exact(step) {
        let value = match bitpix {
            BitPix::U8 => chunk[0] as f64,
            BitPix::I16 => i16::from_be_bytes([chunk[0], chunk[1]]) as f64,
            BitPix::I32 => i32::from_be_bytes(chunk.try_into().unwrap_or([0; 4])) as f64,
            BitPix::I64 => i64::from_be_bytes(chunk.try_into().unwrap_or([0; 8])) as f64,
            BitPix::F32 => f32::from_be_bytes(chunk.try_into().unwrap_or([0; 4])) as f64,
            BitPix::F64 => f64::from_be_bytes(chunk.try_into().unwrap_or([0; 8])),
        };
        data.push(bscale * value + bzero);
    }
    data
}
