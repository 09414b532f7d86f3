//! `ipatlas lookup` - Look up an IP address or domain name.

use anyhow::Result;
use colored::Colorize;
use ipatlas::{GeoResult, LookupOutcome, LookupReport, Target};
use tabled::{settings::Style, Table, Tabled};

use super::Context;
use crate::cli::args::LookupArgs;
use crate::education::Explain;
use crate::output::OutputFormat;

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

pub async fn execute(ctx: Context, args: LookupArgs) -> Result<()> {
    if ctx.explain {
        Explain::lookup(&args.target).print();
    }

    let runner = ctx.runner()?;

    let spinner = if ctx.output_format == OutputFormat::Pretty {
        let pb = indicatif::ProgressBar::new_spinner();
        pb.set_message(format!("Looking up {}...", args.target));
        pb.enable_steady_tick(std::time::Duration::from_millis(80));
        Some(pb)
    } else {
        None
    };

    let outcome = runner.run(&args.target).await;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    render_outcome(&ctx, &outcome);

    if args.map {
        if let LookupOutcome::Report(report) = &outcome {
            if let Ok(geo) = &report.geo {
                open::that(map_url(geo))?;
            }
        }
    }

    Ok(())
}

/// Render a completed query in the configured output format.
///
/// Shared with the interactive shell; every outcome becomes a rendered
/// message, never a propagated fault.
pub(crate) fn render_outcome(ctx: &Context, outcome: &LookupOutcome) {
    match ctx.output_format {
        OutputFormat::Json => {
            // to_string_pretty on a Value cannot fail
            println!(
                "{}",
                serde_json::to_string_pretty(&outcome_to_json(outcome)).unwrap_or_default()
            );
        }
        OutputFormat::Yaml => {
            println!(
                "{}",
                serde_yaml::to_string(&outcome_to_json(outcome)).unwrap_or_default()
            );
        }
        OutputFormat::Csv => print_csv(outcome),
        OutputFormat::Pretty => print_pretty(ctx, outcome),
    }
}

/// OpenStreetMap link for the result's coordinates (the "map pin")
pub(crate) fn map_url(geo: &GeoResult) -> String {
    let (lat, lon) = geo.coordinates();
    format!("https://www.openstreetmap.org/?mlat={lat}&mlon={lon}#map=12/{lat}/{lon}")
}

fn outcome_to_json(outcome: &LookupOutcome) -> serde_json::Value {
    match outcome {
        LookupOutcome::EmptyInput => serde_json::json!({
            "kind": "empty_input",
            "warning": "no IP address or domain name given",
        }),
        LookupOutcome::ResolutionFailed { domain, reason } => serde_json::json!({
            "kind": "resolution_failed",
            "error": format!("could not resolve {domain}: {reason}"),
        }),
        LookupOutcome::Report(report) => serde_json::json!({
            "kind": "report",
            "target": report.target,
            "geo": match &report.geo {
                Ok(geo) => serde_json::json!(geo),
                Err(e) => serde_json::json!({ "error": e.to_string() }),
            },
            "whois": report.whois.as_ref().map(|whois| match whois {
                Ok(w) => serde_json::json!(w),
                Err(e) => serde_json::json!({ "error": e.to_string() }),
            }),
        }),
    }
}

fn print_csv(outcome: &LookupOutcome) {
    println!("ip,country,region,city,zip_code,isp,latitude,longitude,timezone");

    if let LookupOutcome::Report(report) = outcome {
        if let Ok(geo) = &report.geo {
            println!(
                "{},{},{},{},{},\"{}\",{},{},{}",
                geo.ip,
                geo.country,
                geo.region,
                geo.city,
                geo.zip_code,
                geo.isp,
                geo.latitude,
                geo.longitude,
                geo.timezone
            );
        }
    }
}

fn print_pretty(ctx: &Context, outcome: &LookupOutcome) {
    match outcome {
        LookupOutcome::EmptyInput => {
            println!(
                "{}",
                "Please enter an IP address or domain name.".yellow()
            );
        }
        LookupOutcome::ResolutionFailed { domain, reason } => {
            println!(
                "{} could not resolve {}: {}",
                "Error:".red().bold(),
                domain.bold(),
                reason
            );
        }
        LookupOutcome::Report(report) => print_report_pretty(ctx, report),
    }
}

fn print_report_pretty(ctx: &Context, report: &LookupReport) {
    match &report.target {
        Target::IpLiteral { ip } => {
            println!("{} {}", "Target:".bold(), ip.cyan().bold());
        }
        Target::Domain { name, ip } => {
            println!(
                "{} {} {}",
                "Target:".bold(),
                name.cyan().bold(),
                format!("(resolved to {ip})").dimmed()
            );
        }
    }
    println!();

    match &report.geo {
        Ok(geo) => {
            println!("{}", "IP information fetched successfully!".green());
            println!();

            // Coordinates are rendered as the map pin, not as rows.
            let rows = vec![
                FieldRow {
                    field: "IP Address",
                    value: geo.ip.clone(),
                },
                FieldRow {
                    field: "Country",
                    value: geo.country.clone(),
                },
                FieldRow {
                    field: "Region",
                    value: geo.region.clone(),
                },
                FieldRow {
                    field: "City",
                    value: geo.city.clone(),
                },
                FieldRow {
                    field: "ZIP Code",
                    value: geo.zip_code.clone(),
                },
                FieldRow {
                    field: "ISP",
                    value: geo.isp.clone(),
                },
                FieldRow {
                    field: "Timezone",
                    value: geo.timezone.clone(),
                },
            ];

            let table = Table::new(&rows).with(Style::rounded()).to_string();
            println!("{table}");

            if ctx.show_map {
                println!();
                println!("{} {}", "Map pin:".bold(), map_url(geo).cyan().underline());
            }
        }
        Err(e) => {
            println!("{} {}", "Error:".red().bold(), e);
        }
    }

    match &report.whois {
        Some(Ok(whois)) => {
            println!();
            println!("{}", "WHOIS Registration:".bold().underline());

            let rows = vec![
                FieldRow {
                    field: "Domain Name",
                    value: whois.domain_name.clone(),
                },
                FieldRow {
                    field: "Registrar",
                    value: whois.registrar.clone(),
                },
                FieldRow {
                    field: "Created",
                    value: whois.created_date.clone(),
                },
                FieldRow {
                    field: "Expires",
                    value: whois.expiry_date.clone(),
                },
                FieldRow {
                    field: "Organization",
                    value: whois.organization.clone(),
                },
                FieldRow {
                    field: "Name Servers",
                    value: whois.name_servers.clone(),
                },
            ];

            let table = Table::new(&rows).with(Style::rounded()).to_string();
            println!("{table}");
        }
        Some(Err(e)) => {
            println!();
            println!("{} {}", "WHOIS:".yellow().bold(), e);
        }
        None => {}
    }
}
