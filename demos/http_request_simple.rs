use retry_seq::{retry, ConstantBackoff};

fn main() -> anyhow::Result<()> {
    let text = retry(
        || -> anyhow::Result<String> {
            Ok(reqwest::blocking::get("http://localhost:8085")?.text()?)
        },
        |result| result.is_err(),
        ConstantBackoff::new(100).take(10),
    )?;

    eprintln!("text = {:#?}", text);

    Ok(())
}
