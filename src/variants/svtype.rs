use std::collections::HashSet;
use std::iter::FromIterator;
use std::str::FromStr;

/// Structural variant type as annotated in the `TYPE` field of a BEDPE record.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum SvType {
    #[strum(serialize = "DEL")]
    #[serde(rename = "DEL")]
    Deletion,
    #[strum(serialize = "INV")]
    #[serde(rename = "INV")]
    Inversion,
    #[strum(serialize = "DUP")]
    #[serde(rename = "DUP")]
    Duplication,
    #[strum(serialize = "INS")]
    #[serde(rename = "INS")]
    Insertion,
    #[strum(serialize = "BND")]
    #[serde(rename = "BND")]
    Breakend,
    #[strum(serialize = "UNK")]
    #[serde(rename = "UNK")]
    Unknown,
}

impl SvType {
    /// Infer the type from an annotation value.
    ///
    /// Absent, empty, `None` or unrecognized tags all map to `SvType::Unknown`.
    pub fn from_annotation(tag: Option<&str>) -> Self {
        match tag {
            Some(tag) if !tag.is_empty() => SvType::from_str(tag).unwrap_or(SvType::Unknown),
            _ => SvType::Unknown,
        }
    }

    /// Whether breakpoint pairs of this type collapse into a single span on the first contig.
    pub fn is_span(self) -> bool {
        matches!(self, SvType::Deletion | SvType::Inversion)
    }
}

/// The set of SV types a caller wants reported.
///
/// Built once and never mutated afterwards. The built-in default only contains deletions,
/// inversions have to be added explicitly with `with`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedSvTypes {
    types: HashSet<SvType>,
}

impl Default for SupportedSvTypes {
    fn default() -> Self {
        SupportedSvTypes {
            types: [SvType::Deletion].iter().copied().collect(),
        }
    }
}

impl SupportedSvTypes {
    /// Add the given type to the set.
    pub fn with(mut self, svtype: SvType) -> Self {
        self.types.insert(svtype);
        self
    }

    /// Intersect with an optional allow-list. `None` keeps the set unchanged, an empty
    /// list yields the empty set.
    pub fn restrict(self, svs_to_report: Option<&[SvType]>) -> Self {
        match svs_to_report {
            Some(svs_to_report) => {
                let allowed: HashSet<_> = svs_to_report.iter().copied().collect();
                SupportedSvTypes {
                    types: self.types.intersection(&allowed).copied().collect(),
                }
            }
            None => self,
        }
    }

    pub fn contains(&self, svtype: SvType) -> bool {
        self.types.contains(&svtype)
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = SvType> + '_ {
        self.types.iter().copied()
    }
}

impl FromIterator<SvType> for SupportedSvTypes {
    fn from_iter<I: IntoIterator<Item = SvType>>(iter: I) -> Self {
        SupportedSvTypes {
            types: iter.into_iter().collect(),
        }
    }
}
