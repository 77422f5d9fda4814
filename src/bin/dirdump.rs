//! Directive configuration inspection tool.
//!
//! Dumps a shipped target's assembler syntax configuration, or resolves a
//! single (width, address space) query from the command line.

use asminfo::{target_asm_info, AddrSpace, DirectiveLookup, TargetAsmInfo, Width};
use clap::Parser;

#[derive(Parser)]
#[command(name = "dirdump", about = "Dump a target's data directive configuration")]
struct Args {
    /// Target name, e.g. "pic16".
    target: String,

    /// Address space to query; 0 is the default space.
    #[arg(long, requires = "width")]
    space: Option<u32>,

    /// Width in bits to query.
    #[arg(long, requires = "space")]
    width: Option<u32>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let info = match target_asm_info(&args.target) {
        Ok(info) => info,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match (args.width, args.space) {
        (Some(bits), Some(space)) => resolve(&info, bits, AddrSpace(space)),
        _ => dump(&args.target, &info),
    }
}

fn resolve(info: &TargetAsmInfo, bits: u32, space: AddrSpace) {
    let Some(width) = Width::from_bits(bits) else {
        println!("{}-bit {}: unsupported", bits, space);
        return;
    };
    match info.space_directive(width, space) {
        DirectiveLookup::Directive(d) => println!("{}-bit {}: {:?}", bits, space, d.as_str()),
        DirectiveLookup::DeferToBase => match info.syntax.data_directive(width) {
            Some(d) => println!("{}-bit {}: {:?} (base)", bits, space, d.as_str()),
            None => println!("{}-bit {}: unsupported", bits, space),
        },
        DirectiveLookup::Unsupported => println!("{}-bit {}: unsupported", bits, space),
    }
}

fn dump(name: &str, info: &TargetAsmInfo) {
    println!("target: {}", name);
    println!("comment: {:?}", info.syntax.comment_string);
    for width in Width::ALL {
        match info.syntax.data_directive(width) {
            Some(d) => println!("  data{}: {:?}", width.bits(), d.as_str()),
            None => println!("  data{}: (none)", width.bits()),
        }
    }

    let mut spaces: Vec<_> = info.spaces.iter().collect();
    spaces.sort_by_key(|(space, _)| *space);
    for (space, dirs) in spaces {
        println!("{}:", space);
        for width in Width::ALL {
            match dirs.get(width) {
                Some(d) => println!("  data{}: {:?}", width.bits(), d.as_str()),
                None => println!("  data{}: (none)", width.bits()),
            }
        }
    }
}
