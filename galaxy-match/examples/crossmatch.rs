use galaxy_match::{match_to_catalog, JoinPolicy, MatchConfig};
use galaxy_table::{Table, Value};

fn main() -> anyhow::Result<()> {
    let mut galaxies = Table::new();
    for (name, ra, dec) in [("a", 10.0, 10.0), ("b", 20.0, 10.0), ("edge", 100.001, 80.0)] {
        galaxies.push_row(vec![
            ("name", Value::from(name)),
            ("ra", Value::from(ra)),
            ("dec", Value::from(dec)),
        ])?;
    }

    let mut catalog = Table::new();
    for (name, ra, dec, mag) in [("a", 10.0, 10.0, 14.2), ("c", 100.0, 80.0, 16.8)] {
        catalog.push_row(vec![
            ("name", Value::from(name)),
            ("ra", Value::from(ra)),
            ("dec", Value::from(dec)),
            ("mag", Value::from(mag)),
        ])?;
    }

    let config = MatchConfig {
        policy: JoinPolicy::Inner,
        ..Default::default()
    };
    let (matched, unmatched) = match_to_catalog(&galaxies, &catalog, &config)?;

    println!(
        "{} matched within {:.1}\", {} unmatched:\n",
        matched.n_rows(),
        config.radius.arcseconds(),
        unmatched.n_rows(),
    );

    for r in 0..matched.n_rows() {
        println!(
            "  {:>6}  ->  catalog {:>4}  sep {:>10.4}\"",
            matched.value("name_subject", r)?.as_str().unwrap_or("?"),
            matched.value("name", r)?.as_str().unwrap_or("?"),
            matched.value("sky_separation", r)?.as_f64().unwrap_or(f64::NAN),
        );
    }
    for r in 0..unmatched.n_rows() {
        println!(
            "  {:>6}  ->  no counterpart (nearest {:>10.4}\" away)",
            unmatched.value("name", r)?.as_str().unwrap_or("?"),
            unmatched.value("sky_separation", r)?.as_f64().unwrap_or(f64::NAN),
        );
    }

    Ok(())
}
