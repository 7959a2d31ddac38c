//! Attribute extraction through the HDF5 binding.
//!
//! Every function here opens the file read-only, pulls what it needs and
//! drops the handle before returning, so no HDF5 state outlives a call.
//! Attributes are decoded by datatype class; classes the parser has no use
//! for (compounds, enums, references) are skipped rather than failing the
//! whole group.

use std::ops::Deref;
use std::path::Path;

use hdf5::types::{
    FixedAscii, FixedUnicode, FloatSize, H5Type, IntSize, TypeDescriptor, VarLenAscii,
    VarLenUnicode,
};
use hdf5::{Attribute, File, Group};

use crate::attrs::{self, AttrMap, AttrValue};
use crate::error::Error;
use crate::schema;

/// Read every decodable attribute of `group` into a map.
pub fn read_group_attrs(path: &Path, group: &str) -> Result<AttrMap, Error> {
    let file = File::open(path)?;
    let group = open_group(&file, group)?;
    let mut map = AttrMap::new();
    for name in group.attr_names()? {
        let attr = group.attr(&name)?;
        if let Some(value) = decode_attr(&attr)? {
            map.insert(name, value);
        }
    }
    Ok(map)
}

/// Whether the file has a root-level link of the given name.
pub fn has_group(path: &Path, name: &str) -> Result<bool, Error> {
    let file = File::open(path)?;
    Ok(file.link_exists(name))
}

/// Read the `Header/Code` tag naming the producing simulator.
pub fn read_code_tag(path: &Path) -> Result<String, Error> {
    let header = read_group_attrs(path, schema::HEADER)?;
    attrs::require_str(&header, schema::HEADER, schema::CODE).map(|tag| tag.to_string())
}

fn open_group(file: &File, name: &str) -> Result<Group, Error> {
    file.group(name)
        .map_err(|_| Error::GroupNotFound(name.to_string()))
}

/// Decode one attribute, or `None` for datatype classes we skip.
fn decode_attr(attr: &Attribute) -> Result<Option<AttrValue>, Error> {
    let descriptor = attr.dtype()?.to_descriptor()?;
    let scalar = attr.ndim() == 0;
    let value = match descriptor {
        TypeDescriptor::Integer(size) => read_signed(attr, size, scalar)?,
        TypeDescriptor::Unsigned(size) => read_unsigned(attr, size, scalar)?,
        TypeDescriptor::Float(size) => read_float(attr, size, scalar)?,
        TypeDescriptor::Boolean => {
            if scalar {
                AttrValue::I64(attr.read_scalar::<bool>()? as i64)
            } else {
                return Ok(None);
            }
        }
        TypeDescriptor::FixedAscii(len) => match read_fixed_strings(attr, len, false, scalar)? {
            Some(value) => value,
            None => return Ok(None),
        },
        TypeDescriptor::FixedUnicode(len) => match read_fixed_strings(attr, len, true, scalar)? {
            Some(value) => value,
            None => return Ok(None),
        },
        TypeDescriptor::VarLenAscii => {
            if scalar {
                AttrValue::String(attr.read_scalar::<VarLenAscii>()?.to_string())
            } else {
                AttrValue::StringArray(
                    attr.read_raw::<VarLenAscii>()?
                        .into_iter()
                        .map(|s| s.to_string())
                        .collect(),
                )
            }
        }
        TypeDescriptor::VarLenUnicode => {
            if scalar {
                AttrValue::String(attr.read_scalar::<VarLenUnicode>()?.to_string())
            } else {
                AttrValue::StringArray(
                    attr.read_raw::<VarLenUnicode>()?
                        .into_iter()
                        .map(|s| s.to_string())
                        .collect(),
                )
            }
        }
        _ => return Ok(None),
    };
    Ok(Some(value))
}

fn read_signed(attr: &Attribute, size: IntSize, scalar: bool) -> Result<AttrValue, Error> {
    macro_rules! read {
        ($ty:ty) => {
            if scalar {
                AttrValue::I64(attr.read_scalar::<$ty>()? as i64)
            } else {
                AttrValue::I64Array(
                    attr.read_raw::<$ty>()?.into_iter().map(|v| v as i64).collect(),
                )
            }
        };
    }
    Ok(match size {
        IntSize::U1 => read!(i8),
        IntSize::U2 => read!(i16),
        IntSize::U4 => read!(i32),
        IntSize::U8 => read!(i64),
    })
}

fn read_unsigned(attr: &Attribute, size: IntSize, scalar: bool) -> Result<AttrValue, Error> {
    // Scalars keep the unsigned flavour; arrays are widened into the
    // signed array the parser treats all integers as.
    macro_rules! read {
        ($ty:ty) => {
            if scalar {
                AttrValue::U64(attr.read_scalar::<$ty>()? as u64)
            } else {
                AttrValue::I64Array(
                    attr.read_raw::<$ty>()?.into_iter().map(|v| v as i64).collect(),
                )
            }
        };
    }
    Ok(match size {
        IntSize::U1 => read!(u8),
        IntSize::U2 => read!(u16),
        IntSize::U4 => read!(u32),
        IntSize::U8 => read!(u64),
    })
}

fn read_float(attr: &Attribute, size: FloatSize, scalar: bool) -> Result<AttrValue, Error> {
    macro_rules! read {
        ($ty:ty) => {
            if scalar {
                AttrValue::F64(attr.read_scalar::<$ty>()? as f64)
            } else {
                AttrValue::F64Array(
                    attr.read_raw::<$ty>()?.into_iter().map(|v| v as f64).collect(),
                )
            }
        };
    }
    Ok(match size {
        FloatSize::U4 => read!(f32),
        FloatSize::U8 => read!(f64),
    })
}

/// Read a fixed-length string attribute, scalar or array.
///
/// The binding types fixed strings by capacity at compile time, so read
/// with the smallest supported capacity that fits the stored length and
/// let the library pad during conversion. SWIFT writes all of its metadata
/// strings fixed-length. A stored length beyond the largest capacity is
/// skipped (`None`) like any other undecodable attribute.
fn read_fixed_strings(
    attr: &Attribute,
    len: usize,
    unicode: bool,
    scalar: bool,
) -> Result<Option<AttrValue>, Error> {
    fn read_with<T>(attr: &Attribute, scalar: bool) -> Result<AttrValue, Error>
    where
        T: H5Type + Deref<Target = str>,
    {
        if scalar {
            let s = attr.read_scalar::<T>()?;
            Ok(AttrValue::String(s.trim_end_matches('\0').to_string()))
        } else {
            let strings = attr
                .read_raw::<T>()?
                .iter()
                .map(|s| s.trim_end_matches('\0').to_string())
                .collect();
            Ok(AttrValue::StringArray(strings))
        }
    }

    macro_rules! with_capacity {
        ($($cap:literal),*) => {
            $(
                if len <= $cap {
                    let value = if unicode {
                        read_with::<FixedUnicode<$cap>>(attr, scalar)?
                    } else {
                        read_with::<FixedAscii<$cap>>(attr, scalar)?
                    };
                    return Ok(Some(value));
                }
            )*
        };
    }
    with_capacity!(16, 64, 256, 1024, 4096);
    Ok(None)
}
