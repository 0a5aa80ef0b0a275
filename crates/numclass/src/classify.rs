use crate::prelude::{println, *};
use colored::Colorize;
use numclass_core::classify::{classify, parse_number, Classification};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ClassifyOptions {
    /// Number to classify: any base-10 numeral, including negative and fractional
    #[clap(env = "NUMCLASS_NUMBER")]
    pub number: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Skip the fun-fact lookup
    #[arg(long)]
    pub no_fact: bool,
}

pub async fn run(options: ClassifyOptions, global: crate::Global) -> Result<()> {
    let n = parse_number(&options.number).map_err(|err| eyre!("{err}"))?;

    if global.verbose {
        println!("Classifying {n}");
    }

    let fun_fact = if options.no_fact {
        String::new()
    } else {
        let client = reqwest::Client::new();
        crate::facts::fun_fact(&client, &global.facts_api, n).await
    };

    let result = classify(n, fun_fact);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        output_formatted(&result);
    }

    Ok(())
}

fn output_formatted(result: &Classification) {
    println!(
        "\n{}\n",
        format!("Number {}", result.number).bright_cyan().bold()
    );

    let mut table = new_table();
    table.add_row(prettytable::row!["Prime", result.is_prime]);
    table.add_row(prettytable::row!["Perfect", result.is_perfect]);
    table.add_row(prettytable::row!["Properties", result.properties.join(", ")]);
    table.add_row(prettytable::row!["Digit sum", result.digit_sum]);
    table.printstd();

    if !result.fun_fact.is_empty() {
        println!("\n{}", result.fun_fact.bright_black());
    }
}
