//! Supplier command

use crate::app::{OutputFormat, SupplierArgs};
use anyhow::Result;
use freshcast_core::{BusinessAssistant, Config};

pub async fn run(args: SupplierArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let assistant = BusinessAssistant::from_config(&config.assistant)?;
    let advice = assistant
        .supplier_recommendations(&args.material, &args.location, &args.budget)
        .await?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "material": args.material,
                "location": args.location,
                "budget": args.budget,
                "advice": advice,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Cli => println!("{}", advice.trim_end()),
    }
    Ok(())
}
