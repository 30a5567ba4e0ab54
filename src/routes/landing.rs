use actix_web::{http::header::ContentType, HttpResponse};

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <title>SOLCAT - Solana Ecosystem Guardian</title>
    <meta name="description" content="SOLCAT is a Solana ecosystem guardian that helps combat airdrop hunters and protect the ecosystem's fairness." />
  </head>
  <body>
    <main>
      <h1>Welcome to SOLCAT</h1>
      <p>The Guardian of Solana Ecosystem</p>
      <section>
        <h2>CatEye Browser Extension</h2>
        <p>Mark and monitor suspicious addresses in the Solana ecosystem</p>
      </section>
      <section>
        <h2>CatPaw Analytics</h2>
        <p>Advanced dashboard for tracking and analyzing suspicious activities</p>
      </section>
      <section>
        <h2>CatCouncil DAO</h2>
        <p>Community-driven governance for ecosystem protection</p>
      </section>
    </main>
    <footer>
      <a href="https://www.solcat.work">Website</a>
      <a href="https://x.com/SOLCAT_xyz">Twitter</a>
      <a href="https://github.com/SOLCATxyz/SOLCAT">GitHub</a>
    </footer>
  </body>
</html>
"#;

pub async fn landing() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(LANDING_PAGE)
}
