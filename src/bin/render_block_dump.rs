use std::{env, error::Error, fs, sync::Arc};

use blocco::application::pipeline::BlockRenderService;
use blocco::infra::memory::FixtureContentStore;
use blocco::infra::telemetry;

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);

    let kind = args
        .next()
        .expect("usage: render_block_dump <terms|posts> <attributes_json_path>");
    let path = args
        .next()
        .expect("usage: render_block_dump <terms|posts> <attributes_json_path>");
    if args.next().is_some() {
        panic!("usage: render_block_dump <terms|posts> <attributes_json_path>");
    }

    telemetry::init()?;

    let raw = fs::read_to_string(&path)?;
    let attributes: serde_json::Value = serde_json::from_str(&raw)?;

    let store = Arc::new(FixtureContentStore::seeded());
    let service = BlockRenderService::new(store.clone(), store);

    let markup = match kind.as_str() {
        "terms" => service.render_terms_block(&attributes)?,
        "posts" => service.render_posts_block(&attributes)?,
        other => {
            eprintln!("unknown block kind '{other}', expected 'terms' or 'posts'");
            std::process::exit(2);
        }
    };

    println!("{markup}");
    Ok(())
}
