use std::fmt;
use std::str::FromStr;

/// Record types the store is allowed to carry. `CNAME` and `SRV` can be
/// stored but have no synthesis path yet; answers for them are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    MX,
    NS,
    PTR,
    SOA,
    SRV,
    TXT,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::MX => "MX",
            RecordType::NS => "NS",
            RecordType::PTR => "PTR",
            RecordType::SOA => "SOA",
            RecordType::SRV => "SRV",
            RecordType::TXT => "TXT",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::PTR => 12,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::AAAA => 28,
            RecordType::SRV => 33,
        }
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            1 => Some(RecordType::A),
            2 => Some(RecordType::NS),
            5 => Some(RecordType::CNAME),
            6 => Some(RecordType::SOA),
            12 => Some(RecordType::PTR),
            15 => Some(RecordType::MX),
            16 => Some(RecordType::TXT),
            28 => Some(RecordType::AAAA),
            33 => Some(RecordType::SRV),
            _ => None,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "CNAME" => Ok(RecordType::CNAME),
            "MX" => Ok(RecordType::MX),
            "NS" => Ok(RecordType::NS),
            "PTR" => Ok(RecordType::PTR),
            "SOA" => Ok(RecordType::SOA),
            "SRV" => Ok(RecordType::SRV),
            "TXT" => Ok(RecordType::TXT),
            _ => Err(format!("Unknown record type: {}", s)),
        }
    }
}

/// The type filter of an incoming query. `ANY` (code 255) skips type
/// filtering at the store level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryType {
    Any,
    Of(RecordType),
}

impl QueryType {
    pub const ANY_CODE: u16 = 255;

    pub fn from_u16(code: u16) -> Option<Self> {
        if code == Self::ANY_CODE {
            return Some(QueryType::Any);
        }
        RecordType::from_u16(code).map(QueryType::Of)
    }

    /// Store-level type filter; `None` means no filtering.
    pub fn filter(&self) -> Option<RecordType> {
        match self {
            QueryType::Any => None,
            QueryType::Of(rt) => Some(*rt),
        }
    }

    pub fn matches(&self, rt: RecordType) -> bool {
        match self {
            QueryType::Any => true,
            QueryType::Of(wanted) => *wanted == rt,
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryType::Any => write!(f, "ANY"),
            QueryType::Of(rt) => write!(f, "{}", rt),
        }
    }
}
