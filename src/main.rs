use anyhow::Result;
use memberdata::{dataset::global, Category};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) validate the built-in members before anything reads them ─
    let dataset = match global::init_builtin() {
        Ok(ds) => ds,
        Err(e) => {
            error!(kind = %e.kind(), "member data rejected: {}", e);
            return Err(e.into());
        }
    };

    // ─── 3) roster ───────────────────────────────────────────────────
    for (degree, n) in dataset.count_by(Category::Degree) {
        info!(degree, members = n, "degree");
    }
    for (department, n) in dataset.count_by(Category::Department) {
        info!(department, members = n, "department");
    }
    for entry in dataset.entries() {
        info!(
            name = entry.record.display_name(),
            degree = entry.degree,
            department = entry.department,
            year = ?entry.record.graduation_year,
            image = ?entry.image().map(|h| h.as_str()),
            "member"
        );
    }

    info!("done");
    Ok(())
}
