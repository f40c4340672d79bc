use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Compile a criteria document into a SELECT statement
    Compile {
        #[arg(long, help = "Criteria file path (JSON)")]
        input: String,

        /// SQL dialect: "pg" or "mysql"
        #[arg(long, default_value = "pg")]
        dialect: String,

        #[arg(
            long,
            help = "If set, prints the statement and its parameters as JSON"
        )]
        json: bool,
    },
    /// Validate a criteria document without printing the statement
    Check {
        #[arg(long, help = "Criteria file path (JSON)")]
        input: String,
    },
}
