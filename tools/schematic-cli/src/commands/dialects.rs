use anyhow::Result;
use clap::Args;
use schematic::dialect::Dialect;

#[derive(Args)]
pub struct DialectsArgs {
    /// Also list each dialect's identifier limits and table options
    #[arg(short, long)]
    long: bool,
}

impl DialectsArgs {
    pub fn run(self) -> Result<()> {
        for dialect in Dialect::builtin() {
            if !self.long {
                println!("{}", dialect.name);
                continue;
            }
            let mut options = Vec::new();
            if dialect.features.if_not_exists {
                options.push("IF NOT EXISTS");
            }
            if dialect.features.distribution_keys {
                options.push("DISTKEY/SORTKEY");
            }
            println!(
                "{}: identifiers up to {} characters; options: {}",
                dialect.name,
                dialect.identifiers.max_length,
                if options.is_empty() {
                    "none".to_string()
                } else {
                    options.join(", ")
                }
            );
        }
        Ok(())
    }
}
