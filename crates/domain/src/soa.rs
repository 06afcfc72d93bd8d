use super::DomainError;
use std::fmt;

/// Start-of-authority fields, stored in the record content column as a
/// single space-separated line:
///
/// `<mname> <rname> <serial> <refresh> <retry> <expire> <minimum>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoaData {
    pub mname: String,
    pub rname: String,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minimum: u32,
}

impl SoaData {
    /// Decodes the 7-token content line. All-or-nothing: fewer than
    /// seven tokens, or any numeric field that fails to parse, fails
    /// the whole decode.
    pub fn decode(line: &str) -> Result<Self, DomainError> {
        let tokens: Vec<&str> = line.split(' ').collect();
        if tokens.len() < 7 {
            return Err(DomainError::MalformedContent(format!(
                "SOA content has {} of 7 required fields: {:?}",
                tokens.len(),
                line
            )));
        }

        Ok(Self {
            mname: tokens[0].to_string(),
            rname: tokens[1].to_string(),
            serial: parse_u32(tokens[2])?,
            refresh: parse_u32(tokens[3])?,
            retry: parse_u32(tokens[4])?,
            expire: parse_u32(tokens[5])?,
            minimum: parse_u32(tokens[6])?,
        })
    }
}

// Oversized values are truncated to 32 bits at the point of storage,
// matching the reference decoder's platform-int parse + narrowing cast.
fn parse_u32(token: &str) -> Result<u32, DomainError> {
    token
        .parse::<u64>()
        .map(|v| v as u32)
        .map_err(|_| DomainError::MalformedContent(format!("SOA field is not an integer: {:?}", token)))
}

impl fmt::Display for SoaData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.mname, self.rname, self.serial, self.refresh, self.retry, self.expire, self.minimum
        )
    }
}
