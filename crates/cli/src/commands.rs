use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Compile a filter and print the string sent to the log store
    Compile {
        #[arg(
            long,
            help = "Filter such as \"db1.t1.c1|t2;c2\"",
            required_unless_present = "config",
            conflicts_with = "config"
        )]
        filter: Option<String>,

        #[arg(long, help = "JSON filter config file path")]
        config: Option<String>,

        #[arg(long, help = "Source database type: mysql, oceanbase, ob1, oracle, …")]
        source_type: Option<String>,

        #[arg(long, help = "Tenant prefixed to every table reference")]
        tenant: Option<String>,

        #[arg(long, help = "Schema that replaces any schema named in the filter")]
        branch_db: Option<String>,

        #[arg(
            long,
            help = "If set, prints the compiled filter and column maps as JSON"
        )]
        json: bool,

        #[arg(
            long,
            help = "If specified, writes the JSON report to this file instead of stdout"
        )]
        output: Option<String>,
    },
    /// Print the parsed entries and tokens of a filter as JSON
    Ast {
        #[arg(long, help = "Filter to parse")]
        filter: String,
    },
}
