use crate::error::Error;

pub const FACTS_API_BASE: &str = "http://numbersapi.com";

/// Fetch the raw trivia body for a number
///
/// The number interpolates via `Display`, so integer-valued floats hit the
/// API as plain integers (`28.0` becomes `/28`). The status code is
/// deliberately not checked: whatever body the API returns is the fact.
async fn fetch_fact(client: &reqwest::Client, base: &str, n: f64) -> Result<String, Error> {
    let url = format!("{base}/{n}");

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| Error::Transport(e.to_string()))?;

    response.text().await.map_err(|e| Error::Read(e.to_string()))
}

/// Best-effort fun-fact lookup
///
/// Transport and body-read failures fold into the returned string so that
/// classification never fails on trivia. The two failure modes produce
/// distinct fallback strings, both embedding the number.
pub async fn fun_fact(client: &reqwest::Client, base: &str, n: f64) -> String {
    match fetch_fact(client, base, n).await {
        Ok(fact) => fact,
        Err(Error::Read(_)) => format!("Error reading fact for {n}"),
        Err(Error::Transport(_)) => format!("Could not fetch fact for {n}"),
    }
}
