#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    sunflower_backend::run().await;
}
