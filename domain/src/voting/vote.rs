//! Vote types
//!
//! A vote is built transiently per submission and never stored client-side.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of digits in a CPF
pub const CPF_DIGITS: usize = 11;

/// Voter identifier, normalized to exactly 11 digits (Value Object)
///
/// # Example
///
/// ```
/// use votacao_domain::Cpf;
///
/// let cpf = Cpf::parse("123.456.789-09").unwrap();
/// assert_eq!(cpf.as_str(), "12345678909");
///
/// assert!(Cpf::parse("123").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Cpf(String);

impl Cpf {
    /// Strip every non-digit character and require exactly 11 digits
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let digits = only_digits(input);
        if digits.len() != CPF_DIGITS {
            return Err(DomainError::InvalidCpf {
                digits: digits.len(),
            });
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Formatted as `000.000.000-00`
    pub fn formatted(&self) -> String {
        let d = &self.0;
        format!("{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11])
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

/// Keep only ASCII digits
pub fn only_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Ballot choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VoteChoice {
    #[default]
    #[serde(rename = "SIM")]
    Yes,
    #[serde(rename = "NAO")]
    No,
}

impl VoteChoice {
    pub fn as_wire(&self) -> &'static str {
        match self {
            VoteChoice::Yes => "SIM",
            VoteChoice::No => "NAO",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            VoteChoice::Yes => "YES",
            VoteChoice::No => "NO",
        }
    }
}

impl FromStr for VoteChoice {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "YES" | "Y" | "SIM" | "S" => Ok(VoteChoice::Yes),
            "NO" | "N" | "NAO" | "NÃO" => Ok(VoteChoice::No),
            other => Err(DomainError::InvalidChoice(other.to_string())),
        }
    }
}

impl std::fmt::Display for VoteChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Body of `POST /pautas/{id}/votar`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoteRequest {
    pub cpf: Cpf,
    #[serde(rename = "opcao")]
    pub choice: VoteChoice,
}

impl VoteRequest {
    pub fn new(cpf: Cpf, choice: VoteChoice) -> Self {
        Self { cpf, choice }
    }

    /// Validate the raw identifier and build the request
    pub fn from_input(cpf_input: &str, choice: VoteChoice) -> Result<Self, DomainError> {
        Ok(Self::new(Cpf::parse(cpf_input)?, choice))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_cpf_is_valid() {
        let cpf = Cpf::parse("123.456.789-09").unwrap();
        assert_eq!(cpf.as_str(), "12345678909");
    }

    #[test]
    fn test_short_cpf_is_invalid() {
        assert_eq!(
            Cpf::parse("123"),
            Err(DomainError::InvalidCpf { digits: 3 })
        );
    }

    #[test]
    fn test_letters_are_stripped_before_counting() {
        assert!(Cpf::parse("abc11122233344xyz").is_ok());
        assert!(Cpf::parse("1112223334").is_err());
        assert!(Cpf::parse("111222333444").is_err());
        assert!(Cpf::parse("").is_err());
    }

    #[test]
    fn test_cpf_formatted_display() {
        let cpf = Cpf::parse("11122233344").unwrap();
        assert_eq!(cpf.to_string(), "111.222.333-44");
    }

    #[test]
    fn test_choice_parse() {
        assert_eq!("yes".parse::<VoteChoice>().unwrap(), VoteChoice::Yes);
        assert_eq!("NAO".parse::<VoteChoice>().unwrap(), VoteChoice::No);
        assert!("maybe".parse::<VoteChoice>().is_err());
    }

    #[test]
    fn test_vote_request_wire_format() {
        let request = VoteRequest::from_input("111.222.333-44", VoteChoice::No).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"cpf": "11122233344", "opcao": "NAO"}));
    }
}
