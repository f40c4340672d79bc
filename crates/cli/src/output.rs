use model::core::value::Value;
use serde::Serialize;

use crate::error::CliError;

#[derive(Serialize)]
struct Statement<'a> {
    sql: &'a str,
    params: &'a [Value],
}

pub fn print_statement(sql: &str, params: &[Value], as_json: bool) -> Result<(), CliError> {
    if as_json {
        let json = serde_json::to_string_pretty(&Statement { sql, params })
            .map_err(CliError::JsonSerialize)?;
        println!("{json}");
        return Ok(());
    }

    println!("{sql}");
    for (i, param) in params.iter().enumerate() {
        println!("  #{} = {param}", i + 1);
    }
    Ok(())
}
