use anyhow::Result;

use exam2json::utils::logging;
use exam2json::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let config = Config::from_env();

    let mut args = std::env::args().skip(1);
    let (Some(exam_path), Some(answers_path)) = (args.next(), args.next()) else {
        anyhow::bail!("usage: exam2json <exam-text-file> <answers-text-file>");
    };

    App::new(config, exam_path, answers_path).run().await?;

    Ok(())
}
