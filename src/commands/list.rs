//! # List Command Implementation
//!
//! Lists the resources loaded from every configured registry, along with the
//! base images and login strategies they declare. Without any selection flag
//! everything is listed. Names are full names and sorted so
//! the output is stable across runs.
//!
//! `--tree` additionally resolves every playlist and prints the services it
//! expands to. A playlist that fails to resolve is reported inline instead of
//! aborting the listing.

use anyhow::Result;
use clap::Args;
use serde_json::{json, Map, Value};

use tb::engine::Engine;

use super::Context;

/// List services, playlists and apps
#[derive(Args, Debug)]
pub struct ListArgs {
    /// List services
    #[arg(short, long)]
    pub services: bool,

    /// List registry playlists
    #[arg(short, long)]
    pub playlists: bool,

    /// List custom playlists from the rc file
    #[arg(short, long)]
    pub custom_playlists: bool,

    /// List iOS apps
    #[arg(long)]
    pub ios_apps: bool,

    /// List desktop apps
    #[arg(long)]
    pub desktop_apps: bool,

    /// List base images declared by registries
    #[arg(long)]
    pub base_images: bool,

    /// List login strategies declared by registries
    #[arg(long)]
    pub login_strategies: bool,

    /// Show the services each playlist resolves to
    #[arg(long)]
    pub tree: bool,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    fn all(&self) -> bool {
        !(self.services
            || self.playlists
            || self.custom_playlists
            || self.ios_apps
            || self.desktop_apps
            || self.base_images
            || self.login_strategies)
    }
}

/// One section of the listing.
struct Section {
    key: &'static str,
    title: &'static str,
    names: Vec<String>,
    playlists: bool,
}

fn sorted(names: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut names: Vec<String> = names.into_iter().collect();
    names.sort();
    names
}

fn sections(args: &ListArgs, engine: &Engine) -> Vec<Section> {
    let all = args.all();
    let mut sections = Vec::new();
    if all || args.services {
        sections.push(Section {
            key: "services",
            title: "Services:",
            names: sorted(engine.services().names()),
            playlists: false,
        });
    }
    if all || args.playlists {
        sections.push(Section {
            key: "playlists",
            title: "Playlists:",
            names: sorted(engine.playlists().names()),
            playlists: true,
        });
    }
    if all || args.custom_playlists {
        sections.push(Section {
            key: "customPlaylists",
            title: "Custom playlists:",
            names: sorted(engine.playlists().custom_names()),
            playlists: true,
        });
    }
    if all || args.ios_apps {
        sections.push(Section {
            key: "iosApps",
            title: "iOS apps:",
            names: sorted(engine.ios_apps().names()),
            playlists: false,
        });
    }
    if all || args.desktop_apps {
        sections.push(Section {
            key: "desktopApps",
            title: "Desktop apps:",
            names: sorted(engine.desktop_apps().names()),
            playlists: false,
        });
    }
    if all || args.base_images {
        sections.push(Section {
            key: "baseImages",
            title: "Base images:",
            names: engine.base_images().to_vec(),
            playlists: false,
        });
    }
    if all || args.login_strategies {
        sections.push(Section {
            key: "loginStrategies",
            title: "Login strategies:",
            names: engine.login_strategies().to_vec(),
            playlists: false,
        });
    }
    sections
}

fn render_json(sections: &[Section], engine: &Engine, tree: bool) -> Value {
    let mut root = Map::new();
    for section in sections {
        let value = if tree && section.playlists {
            let resolved: Map<String, Value> = section
                .names
                .iter()
                .map(|name| {
                    let value = match engine.playlists().service_names(name) {
                        Ok(services) => json!(services),
                        Err(e) => json!({ "error": e.to_string() }),
                    };
                    (name.clone(), value)
                })
                .collect();
            Value::Object(resolved)
        } else {
            json!(section.names)
        };
        root.insert(section.key.to_string(), value);
    }
    Value::Object(root)
}

fn render_text(sections: &[Section], engine: &Engine, ctx: &Context, tree: bool) {
    let out = &ctx.out;
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", out.heading(section.title));
        if section.names.is_empty() {
            println!("  {}", out.dim("(none)"));
        }
        for name in &section.names {
            println!("  {}", out.name(name));
            if !(tree && section.playlists) {
                continue;
            }
            match engine.playlists().service_names(name) {
                Ok(services) => {
                    for service in services {
                        println!("    - {}", service);
                    }
                }
                Err(e) => println!("    {}", out.failure(&e.to_string())),
            }
        }
    }
}

/// Execute the `list` command.
pub fn execute(args: ListArgs, ctx: &Context) -> Result<()> {
    let engine = ctx.load_engine()?;
    let sections = sections(&args, &engine);

    if args.json {
        let value = render_json(&sections, &engine, args.tree);
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        render_text(&sections, &engine, ctx, args.tree);
    }
    Ok(())
}
