use clap::Parser;

#[derive(Debug, Parser)]
pub struct AssessConfig {
    #[arg(long, value_delimiter = ',', help = "Points earned from each experience source")]
    pub experience: Vec<u32>,

    #[arg(long, value_delimiter = ',', help = "Points earned from each humanity source")]
    pub humanity: Vec<u32>,

    #[arg(long, value_delimiter = ',', help = "Points earned from each engagement source")]
    pub engagement: Vec<u32>,
}
