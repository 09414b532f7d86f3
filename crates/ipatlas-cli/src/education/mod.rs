//! Educational features: stage-by-stage explanations of what a lookup does.

use colored::Colorize;

/// Command explanation builder.
pub struct Explain {
    #[allow(dead_code)]
    title: String,
    description: String,
    api_call: Option<String>,
    what_happens: Vec<String>,
    learn_more: Option<String>,
}

impl Explain {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            description: String::new(),
            api_call: None,
            what_happens: Vec::new(),
            learn_more: None,
        }
    }

    fn description(mut self, desc: &str) -> Self {
        self.description = desc.to_string();
        self
    }

    fn api(mut self, endpoint: &str) -> Self {
        self.api_call = Some(endpoint.to_string());
        self
    }

    fn step(mut self, step: &str) -> Self {
        self.what_happens.push(step.to_string());
        self
    }

    fn learn_more(mut self, url: &str) -> Self {
        self.learn_more = Some(url.to_string());
        self
    }

    /// Print the explanation to stdout.
    pub fn print(&self) {
        println!();
        println!("{}", "=== What This Does ===".bold().cyan());
        println!("{}", self.description);
        println!();

        if !self.what_happens.is_empty() {
            println!("{}", "How it works:".bold());
            for (i, step) in self.what_happens.iter().enumerate() {
                println!("  {}. {}", i + 1, step);
            }
            println!();
        }

        if let Some(api) = &self.api_call {
            println!("{} {}", "API Call:".bold(), api.dimmed());
        }

        if let Some(url) = &self.learn_more {
            println!();
            println!("{} {}", "Learn more:".bold(), url.cyan().underline());
        }

        println!();
        println!("{}", "=== Results ===".bold().cyan());
        println!();
    }

    // ========================================================================
    // Factory methods for each command
    // ========================================================================

    pub fn lookup(target: &str) -> Self {
        Self::new("Lookup")
            .description(&format!(
                "Finds where {} lives: location, ISP, and (for domains) WHOIS registration data.",
                target
            ))
            .step("Classifies the input: digits and dots mean an IP literal, anything else a domain")
            .step("Domains are resolved to an IPv4 address via the system resolver")
            .step("The IP is geolocated through the free ip-api.com service")
            .step("For domains, registration data is fetched over the WHOIS protocol")
            .step("Coordinates become an OpenStreetMap pin instead of raw numbers")
            .api("GET /json/{ip} (ip-api.com)")
            .learn_more("https://ip-api.com/docs")
    }

    pub fn shell() -> Self {
        Self::new("Shell")
            .description("Starts an interactive prompt that runs one lookup per line.")
            .step("Each line is classified and looked up exactly like `ipatlas lookup`")
            .step("A query runs to completion before the next prompt appears")
            .step("An empty line is a warning; exit or quit leaves the prompt")
    }
}
