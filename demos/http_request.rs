use reqwest::blocking::Response;
use reqwest::StatusCode;
use retry_seq::{expiry, jitter, retry, ExponentialBackoff};

fn main() -> anyhow::Result<()> {
    // Retry server errors with jittered exponential backoff, but give the
    // whole thing at most five seconds of wall-clock time.
    let delays = expiry(jitter(ExponentialBackoff::new(50, 2.0)), 5_000);

    let resp = retry(
        || -> anyhow::Result<Response> {
            let resp = reqwest::blocking::get("http://localhost:8084")?;
            if resp.status() == StatusCode::INTERNAL_SERVER_ERROR {
                anyhow::bail!("server not ready yet");
            }
            Ok(resp)
        },
        |result| result.is_err(),
        delays,
    )?;

    eprintln!("resp = {:#?}", resp);

    Ok(())
}
