use crate::error::Result;
use pest::Parser as _;
use pest_derive::Parser;

/// Pest parser
#[derive(Parser)]
#[grammar = "rolebot.pest"]
pub struct Parser;

impl Parser {
    /// Split a command line into its lowercased name and its arguments
    pub fn split(input: &str) -> Result<(String, Vec<String>)> {
        let command = Self::parse(Rule::command, input)?
            .next()
            .ok_or("empty command line")?;
        let mut name = String::new();
        let mut args = Vec::new();
        for inner in command.into_inner() {
            match inner.as_rule() {
                Rule::name => name = inner.as_str().to_lowercase(),
                Rule::arg => args.push(inner.as_str().to_owned()),
                _ => (),
            }
        }
        Ok((name, args))
    }
}
