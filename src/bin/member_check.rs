use anyhow::{bail, Context, Result};
use memberdata::{
    asset::PLACEHOLDER,
    dataset::{builtin, source::load_document, MemberEntry},
    member::json_schema,
    Category, Dataset, StaticAssets,
};
use serde::Serialize;
use std::env;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

/// Member count for one label, listed in code order.
#[derive(Debug, PartialEq, Serialize)]
struct LabelCount<'a> {
    code: usize,
    label: &'a str,
    members: usize,
}

/// What gets printed for a valid document.
#[derive(Serialize)]
struct Summary<'a> {
    members: usize,
    degrees: Vec<LabelCount<'a>>,
    departments: Vec<LabelCount<'a>>,
    roster: Vec<MemberEntry<'a>>,
}

fn label_counts(dataset: &Dataset, category: Category) -> Vec<LabelCount<'_>> {
    dataset
        .count_by(category)
        .into_iter()
        .enumerate()
        .map(|(code, (label, members))| LabelCount {
            code,
            label,
            members,
        })
        .collect()
}

fn summarize(dataset: &Dataset) -> Summary<'_> {
    Summary {
        members: dataset.len(),
        degrees: label_counts(dataset, Category::Degree),
        departments: label_counts(dataset, Category::Department),
        roster: dataset.entries().collect(),
    }
}

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 1) Parse arguments: `<DOCUMENT>` or `--schema`
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "--schema") {
        println!("{}", serde_json::to_string_pretty(&json_schema())?);
        return Ok(());
    }
    let Some(path) = args.first().map(PathBuf::from) else {
        bail!("Usage: member_check <DOCUMENT.json|DOCUMENT.yaml> | --schema");
    };

    // 2) Assets come from MEMBER_ASSET_DIR when set
    let assets = match env::var_os("MEMBER_ASSET_DIR") {
        Some(dir) => StaticAssets::from_dir(&dir, PLACEHOLDER)
            .with_context(|| format!("loading assets from {}", PathBuf::from(&dir).display()))?,
        None => builtin::assets(),
    };

    // 3) Load and validate
    let doc = load_document(&path)?;
    let dataset = match doc.validate(&assets) {
        Ok(ds) => ds,
        Err(e) => {
            error!(kind = %e.kind(), "{} rejected", path.display());
            bail!("{}: {}: {}", path.display(), e.kind(), e);
        }
    };
    info!("{} ok ({} members)", path.display(), dataset.len());

    // 4) Emit the summary as YAML
    print!("{}", serde_yaml::to_string(&summarize(&dataset))?);
    Ok(())
}
