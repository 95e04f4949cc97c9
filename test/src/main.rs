use std::error::Error;

use atomic_plsql::{external::dotenv::dotenv, parse_page, Options, ResponseUtil};
use tokio::fs::read_to_string;

const SAMPLE_PAGE: &str = "Content-type: text/html; charset=UTF-8\nX-DB-Content-length: 11\nSet-Cookie: session=abc123\n\nsample page";

#[tokio::main]
async fn main() {
    dotenv().ok();

    let text = match std::env::args().nth(1) {
        Some(path) => match read_to_string(&path).await {
            Ok(text) => text,
            Err(e) => {
                println!("failed to read {}: {e:?}", path);
                return;
            }
        },
        None => SAMPLE_PAGE.into(),
    };

    render(&text).await.unwrap_or_else(|e| {
        println!("an error occured; error = {:?}", e);
    });
}

async fn render(text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
    let page = parse_page(text);
    println!("parsed: {:?}\n", page.header);

    let response = page.to_response(&Options::new())?;
    let mut stdout = tokio::io::stdout();
    response.responser(&mut stdout).await?;
    Ok(())
}
