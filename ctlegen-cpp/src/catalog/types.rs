//! Scalar and tuple type catalogue shared by `types.h`, `ntup.h` and the
//! unit-test variants.

/// Bit widths of the integer scalars.
pub const INT_BITS: [u8; 4] = [8, 16, 32, 64];
/// Bit widths of the real scalars.
pub const REAL_BITS: [u8; 2] = [32, 64];
/// Largest tuple dimension.
pub const MAX_DIMS: usize = 4;
/// Component names of an n-tuple.
pub const VECTOR_NAMES: [&str; MAX_DIMS] = ["x", "y", "z", "w"];
/// Color aliases of the n-tuple components.
pub const COLOR_NAMES: [&str; MAX_DIMS] = ["r", "g", "b", "a"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Signed,
    Unsigned,
    Real,
}

/// A scalar short-hand such as `i32` or `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scalar {
    pub kind: Kind,
    pub bits: u8,
}

impl Scalar {
    pub fn name(&self) -> String {
        let prefix = match self.kind {
            Kind::Signed => 'i',
            Kind::Unsigned => 'u',
            Kind::Real => 'f',
        };
        format!("{prefix}{}", self.bits)
    }

    /// All scalars: signed/unsigned pairs by width, then the reals.
    pub fn all() -> Vec<Scalar> {
        let ints = INT_BITS.iter().flat_map(|&bits| {
            [Kind::Signed, Kind::Unsigned].map(|kind| Scalar { kind, bits })
        });
        let reals = REAL_BITS.iter().map(|&bits| Scalar {
            kind: Kind::Real,
            bits,
        });
        ints.chain(reals).collect()
    }
}

/// A concrete type in the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeEntry {
    Scalar(Scalar),
    /// `n_tup<scalar, dims>`
    Tuple { scalar: Scalar, dims: usize },
    /// `mn_tup<scalar, inner, outer>`
    TupleOfTuples {
        scalar: Scalar,
        inner: usize,
        outer: usize,
    },
}

impl TypeEntry {
    pub fn name(&self) -> String {
        match self {
            TypeEntry::Scalar(s) => s.name(),
            TypeEntry::Tuple { scalar, dims } => format!("n_tup<{},{dims}>", scalar.name()),
            TypeEntry::TupleOfTuples {
                scalar,
                inner,
                outer,
            } => format!("mn_tup<{},{inner},{outer}>", scalar.name()),
        }
    }

    pub fn scalar(&self) -> Scalar {
        match *self {
            TypeEntry::Scalar(s)
            | TypeEntry::Tuple { scalar: s, .. }
            | TypeEntry::TupleOfTuples { scalar: s, .. } => s,
        }
    }

    /// Number of outer components; zero for scalars.
    pub fn count(&self) -> usize {
        match *self {
            TypeEntry::Scalar(_) => 0,
            TypeEntry::Tuple { dims, .. } => dims,
            TypeEntry::TupleOfTuples { outer, .. } => outer,
        }
    }

    /// Type of each outer component.
    pub fn component(&self) -> String {
        match *self {
            TypeEntry::Scalar(s) | TypeEntry::Tuple { scalar: s, .. } => s.name(),
            TypeEntry::TupleOfTuples { scalar, inner, .. } => {
                format!("n_tup<{},{inner}>", scalar.name())
            }
        }
    }
}

/// Every type: for each scalar, the scalar itself, its n-tuples and its
/// tuples-of-tuples.
pub fn all_types() -> Vec<TypeEntry> {
    let dims = 1..=MAX_DIMS;
    let mut types = Vec::new();
    for scalar in Scalar::all() {
        types.push(TypeEntry::Scalar(scalar));
        types.extend(dims.clone().map(|dims| TypeEntry::Tuple { scalar, dims }));
        for inner in dims.clone() {
            types.extend(dims.clone().map(|outer| TypeEntry::TupleOfTuples {
                scalar,
                inner,
                outer,
            }));
        }
    }
    types
}

/// Forward declarations emitted into `types.h`, grouped by declaring header.
pub const FORWARD_DECLARATIONS: &[(&str, &[&str])] = &[
    ("status.h", &["enum class status_code : int", "status"]),
    ("data_source.h", &["file_data_source"]),
    ("data_destination.h", &["file_data_destination"]),
    (
        "hasher.h",
        &[
            "hasher_sha256",
            "hasher_xxh64",
            "hasher_xxh128",
            "template <size_t _Size> class hasher_noop",
        ],
    ),
    (
        "read_stream.h",
        &["template<class _DataSourceTy, class _HashTy = hasher_noop<64>> class read_stream"],
    ),
    (
        "write_stream.h",
        &["template<class _DataDestTy, class _HashTy = hasher_noop<64>> class write_stream"],
    ),
    (
        "ntup.h",
        &[
            "template<class _Ty, size_t _Size> class n_tup",
            "template<class _Ty, size_t _InnerSize, size_t _OuterSize> class mn_tup",
        ],
    ),
    ("bimap.h", &["template<class _Kty, class _Vty> class bimap"]),
    ("bitmap_font.h", &["enum class bitmap_font_flags : int"]),
    (
        "file_funcs.h",
        &["enum class access_mode : unsigned int", "_file_object"],
    ),
    ("hash.h", &["template<size_t _Size> struct hash"]),
    (
        "idx_vector.h",
        &[
            "template <class _Ty, class _IdxTy = std::vector<i32>, class _VecTy = std::vector<_Ty>> class idx_vector",
        ],
    ),
];

/// A forward declaration line, adding `class` to plain class names.
pub fn forward_declaration(decl: &str) -> String {
    if decl.starts_with("template") || decl.starts_with("enum") {
        format!("{decl};")
    } else {
        format!("class {decl};")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_order() {
        let names: Vec<String> = Scalar::all().iter().map(Scalar::name).collect();
        assert_eq!(
            names,
            ["i8", "u8", "i16", "u16", "i32", "u32", "i64", "u64", "f32", "f64"]
        );
    }

    #[test]
    fn test_catalogue_size_and_order() {
        let types = all_types();
        // each scalar: itself, 4 n-tuples, 16 tuples-of-tuples
        assert_eq!(types.len(), 10 * 21);
        assert_eq!(types[0].name(), "i8");
        assert_eq!(types[1].name(), "n_tup<i8,1>");
        assert_eq!(types[5].name(), "mn_tup<i8,1,1>");
        assert_eq!(types[6].name(), "mn_tup<i8,1,2>");
        assert_eq!(types.last().unwrap().name(), "mn_tup<f64,4,4>");
    }

    #[test]
    fn test_component() {
        let mn = TypeEntry::TupleOfTuples {
            scalar: Scalar {
                kind: Kind::Real,
                bits: 32,
            },
            inner: 3,
            outer: 2,
        };
        assert_eq!(mn.component(), "n_tup<f32,3>");
        assert_eq!(mn.count(), 2);
    }

    #[test]
    fn test_forward_declaration() {
        assert_eq!(forward_declaration("status"), "class status;");
        assert_eq!(
            forward_declaration("enum class status_code : int"),
            "enum class status_code : int;"
        );
    }
}
