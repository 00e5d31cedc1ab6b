//! Command argument structures

use clap::Args;

use super::parse::parse_score;

/// Arguments for the show command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Product name, as written in the records
    pub product: String,

    /// Include the reference answer
    #[arg(long, short)]
    pub reference: bool,
}

/// Arguments for the compare command.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First product
    pub first: String,

    /// Second product
    pub second: String,

    /// Include the reference answers
    #[arg(long, short)]
    pub reference: bool,

    /// Hide the class averages
    #[arg(long)]
    pub no_average: bool,
}

/// Arguments for the students command.
#[derive(Args, Debug)]
pub struct StudentsArgs {
    /// Only report this submitter id
    #[arg(long, short)]
    pub student: Option<String>,
}

/// Arguments for the submit command.
#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Full name (first and last)
    #[arg(long)]
    pub name: String,

    /// Product being rated
    #[arg(long)]
    pub product: String,

    /// How the product uses AI
    #[arg(long)]
    pub role: Option<String>,

    /// Dimension score as key=value (repeatable)
    #[arg(long = "score", value_parser = parse_score, action = clap::ArgAction::Append)]
    pub scores: Vec<(String, f64)>,

    /// Risk of adversarial attacks, 0 to 5
    #[arg(long, default_value_t = 0.0)]
    pub risk_level: f64,

    /// How an adversarial attack could happen
    #[arg(long, default_value = "")]
    pub risk_description: String,

    /// Which aspects feed back into learning
    #[arg(long, default_value = "")]
    pub feedback_aspects: String,

    /// Analytics type level, 0 to 5
    #[arg(long, default_value_t = 0.0)]
    pub feedback_level: f64,

    /// Why that analytics type level
    #[arg(long, default_value = "")]
    pub feedback_explanation: String,
}
