//! Encoding and decoding of the WKB geometry type word.
//!
//! Plain WKB adds 1000 per extra axis to the base code (Z first, then M), so all valid plain
//! codes stay below 4000. EWKB instead sets the three high flag bits and keeps the base code in
//! the low bits, which also tells the two dialects apart: no plain code has any of those bits
//! set.

use meridian_geo::{CoordinateSystem, GeometryType};

use crate::error::WkbError;

pub(super) const EWKB_Z: u32 = 0x8000_0000;
pub(super) const EWKB_M: u32 = 0x4000_0000;
pub(super) const EWKB_SRID: u32 = 0x2000_0000;

/// Decoded content of a geometry type word, dialect differences already resolved.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) struct TypeWord {
    pub geometry_type: GeometryType,
    pub has_z: bool,
    pub has_m: bool,
    pub has_srid: bool,
}

pub(super) fn decode_type_word(word: u32) -> Result<TypeWord, WkbError> {
    if word & (EWKB_Z | EWKB_M | EWKB_SRID) != 0 {
        let geometry_type = geometry_type_from_base(word & !(EWKB_Z | EWKB_M | EWKB_SRID))
            .ok_or(WkbError::UnsupportedTypeCode(word))?;
        return Ok(TypeWord {
            geometry_type,
            has_z: word & EWKB_Z != 0,
            has_m: word & EWKB_M != 0,
            has_srid: word & EWKB_SRID != 0,
        });
    }

    let dimensions = word / 1000;
    if dimensions > 3 {
        return Err(WkbError::UnsupportedTypeCode(word));
    }
    let geometry_type =
        geometry_type_from_base(word % 1000).ok_or(WkbError::UnsupportedTypeCode(word))?;
    Ok(TypeWord {
        geometry_type,
        has_z: dimensions == 1 || dimensions == 3,
        has_m: dimensions == 2 || dimensions == 3,
        has_srid: false,
    })
}

pub(super) fn plain_type_word(geometry_type: GeometryType, cs: CoordinateSystem) -> u32 {
    base_code(geometry_type) + 1000 * cs.has_z() as u32 + 2000 * cs.has_m() as u32
}

pub(super) fn ewkb_type_word(
    geometry_type: GeometryType,
    cs: CoordinateSystem,
    with_srid: bool,
) -> u32 {
    let mut word = base_code(geometry_type);
    if cs.has_z() {
        word |= EWKB_Z;
    }
    if cs.has_m() {
        word |= EWKB_M;
    }
    if with_srid {
        word |= EWKB_SRID;
    }
    word
}

fn base_code(geometry_type: GeometryType) -> u32 {
    match geometry_type {
        GeometryType::Point => 1,
        GeometryType::LineString => 2,
        GeometryType::Polygon => 3,
        GeometryType::MultiPoint => 4,
        GeometryType::MultiLineString => 5,
        GeometryType::MultiPolygon => 6,
        GeometryType::GeometryCollection => 7,
        GeometryType::CircularString => 8,
        GeometryType::CompoundCurve => 9,
        GeometryType::CurvePolygon => 10,
        GeometryType::PolyhedralSurface => 15,
        GeometryType::Tin => 16,
        GeometryType::Triangle => 17,
    }
}

fn geometry_type_from_base(code: u32) -> Option<GeometryType> {
    Some(match code {
        1 => GeometryType::Point,
        2 => GeometryType::LineString,
        3 => GeometryType::Polygon,
        4 => GeometryType::MultiPoint,
        5 => GeometryType::MultiLineString,
        6 => GeometryType::MultiPolygon,
        7 => GeometryType::GeometryCollection,
        8 => GeometryType::CircularString,
        9 => GeometryType::CompoundCurve,
        10 => GeometryType::CurvePolygon,
        15 => GeometryType::PolyhedralSurface,
        16 => GeometryType::Tin,
        17 => GeometryType::Triangle,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn additive_codes() {
        assert_eq!(
            decode_type_word(1).unwrap(),
            TypeWord {
                geometry_type: GeometryType::Point,
                has_z: false,
                has_m: false,
                has_srid: false,
            }
        );
        assert_eq!(
            decode_type_word(1001).unwrap(),
            TypeWord {
                geometry_type: GeometryType::Point,
                has_z: true,
                has_m: false,
                has_srid: false,
            }
        );
        assert_eq!(
            decode_type_word(2002).unwrap(),
            TypeWord {
                geometry_type: GeometryType::LineString,
                has_z: false,
                has_m: true,
                has_srid: false,
            }
        );
        assert_eq!(
            decode_type_word(3017).unwrap(),
            TypeWord {
                geometry_type: GeometryType::Triangle,
                has_z: true,
                has_m: true,
                has_srid: false,
            }
        );
    }

    #[test]
    fn ewkb_flags() {
        assert_eq!(
            decode_type_word(0x8000_0001).unwrap(),
            TypeWord {
                geometry_type: GeometryType::Point,
                has_z: true,
                has_m: false,
                has_srid: false,
            }
        );
        assert_eq!(
            decode_type_word(0xA000_0001).unwrap(),
            TypeWord {
                geometry_type: GeometryType::Point,
                has_z: true,
                has_m: false,
                has_srid: true,
            }
        );
        assert_eq!(
            decode_type_word(0x4000_0008).unwrap(),
            TypeWord {
                geometry_type: GeometryType::CircularString,
                has_z: false,
                has_m: true,
                has_srid: false,
            }
        );
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_matches!(decode_type_word(0), Err(WkbError::UnsupportedTypeCode(0)));
        assert_matches!(decode_type_word(11), Err(WkbError::UnsupportedTypeCode(11)));
        assert_matches!(
            decode_type_word(4001),
            Err(WkbError::UnsupportedTypeCode(4001))
        );
        assert_matches!(
            decode_type_word(0x2000_000B),
            Err(WkbError::UnsupportedTypeCode(0x2000_000B))
        );
    }

    #[test]
    fn encoding_matches_decoding() {
        let cs = CoordinateSystem::xyzm();
        assert_eq!(plain_type_word(GeometryType::CompoundCurve, cs), 3009);
        assert_eq!(
            ewkb_type_word(GeometryType::CompoundCurve, cs, true),
            EWKB_Z | EWKB_M | EWKB_SRID | 9
        );
        assert_eq!(
            decode_type_word(plain_type_word(GeometryType::Tin, cs)).unwrap(),
            TypeWord {
                geometry_type: GeometryType::Tin,
                has_z: true,
                has_m: true,
                has_srid: false,
            }
        );
    }
}
