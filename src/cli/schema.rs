use crate::parser::AnnotationSet;
use schemars::schema_for;

pub fn execute() -> anyhow::Result<i32> {
    let schema = schema_for!(AnnotationSet);
    let json = serde_json::to_string_pretty(&schema)?;
    println!("{}", json);
    Ok(0)
}
