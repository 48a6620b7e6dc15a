//! CLI entrypoint for `corgon`.
//!
//! Parses command-line arguments, creates the output file, extracts name
//! pairs from the input list, renders identifiers through the configured
//! schema (or the default two-part rule), and writes the selected output
//! format. A reserved schema value prints a corgi instead.
use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use corgon::{
    engine::{Config, extract_from_path, generate_emails, generate_usernames},
    export::{write_gophish_csv, write_simple_list},
    extract::build_delimiter,
    schema::SchemaSpec,
};
use log::{LevelFilter, error};

#[derive(Parser, Debug)]
#[command(
    name = "corgon-rs",
    version,
    about = "Turn a list of names into usernames and e-mail addresses"
)]
struct Args {
    /// Text file that contains names of people
    infile: PathBuf,

    /// Output file to write to
    outfile: PathBuf,

    /// Output function
    #[arg(short = 'f', long = "function", value_enum, default_value_t = OutputMode::GophishCsv)]
    function: OutputMode,

    /// Name list delimiter pattern (default is a whitespace run)
    #[arg(short = 'd', long = "delimiter")]
    delimiter: Option<String>,

    /// Mail domain appended to e-mail addresses
    #[arg(short = 'm', long = "maildomain", default_value = "@example.com")]
    maildomain: String,

    /// Schema for username/mailname, e.g. f1l -> jsmith, l1f -> sjohn,
    /// f1.l -> j.smith, l -> smith. Default is firstname.lastname
    #[arg(short = 's', long = "schema")]
    schema: Option<String>,

    /// Directory domain prepended to usernames (usernames output only)
    #[arg(short = 'a', long = "ad-domain")]
    ad_domain: Option<String>,

    /// Keep letter casing in output (default is lowercase)
    #[arg(long = "keepcase")]
    keepcase: bool,

    /// Keep hyphens in first names
    #[arg(long = "hyphenfn")]
    hyphenfn: bool,

    /// Keep hyphens in last names
    #[arg(long = "hyphenln")]
    hyphenln: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Control color output (auto, always, never)
    #[arg(long = "color", value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputMode {
    #[value(name = "gophish_csv")]
    GophishCsv,
    Emails,
    Usernames,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

/// Reserved schema value that prints the banner instead of running.
const SECRET_SCHEMA: &str = "CORGI";

const CORGI_ART: &str = r#"...........................     ..  ...  .................''..','.......      ...............''.....
.................  .......                ...............................    .......................
.................. .........,cc:;'...    ..................................... ...........','.......
........ .................,dkOkkxdc........... ............................. .............','.......
.........................,xkxxkkkxxo;'.......       .    ..... ...,cllccc,..........................
.........................okxxxxxxxxxdl,....              ..... .:dxdollldo;.........................
.........................dOxxxxxxddxxdl;..        .       ....;xOxolloddddl'........................
.........................lkddxkxxxkkOkdo:.. .   ....   ..  .;dkOxolclooddxo,.....................','
........'''..............,oddxxkxdxkOOkdol;...        ....'lxkkkdollooddddl....................':cc;
..........................:dxkkkxdodxxddxkkdooooollc:::,:odooxkkxlcloddolo;.....  .............',,''
..................',;;... .okOOkxddxxdkOOOO000000OOO0Okxxkkkoloo:;cdxdooo:...............'''''',,,,;
..  ..............';;;'....cxxkOxlldxkO0OOO0000OkxxO00Oxdlloolc;,:oxxxxdl,'',;;;;;;;;;;;;,,,;::ccccc
...    ...........'''''..',lkkkkxddxkO0OO0KKKX0kxxOO0KKOd:;;:c;..;oxxxdo:;;;;::::;;;;;;;;;;:::::ccc:
',''',,'',;:lool:,...'....'cxkkkkOOOkO0KOddk0K0xxkOOOK0xol;,,;:,.;oddddl:::::::::::::::;;;:c:::ccccc
llc::c:,'',;:cc:;,''',,,,,,;okkkkkkxxO0k;...ckOkkkkkkkc...;:;';cc:ldkkdc:::::c::::cc::;,;:ccclllllll
;;;,,,,,,,,,,,;;;;;;;;;;;;;cxxxdxOkkkO0d,...:dkkOOOOx:.   .;:'.,ccloddlcccclllllllllcccccllllooodddd
,,,,,;;;;;;;::::::;;;:::cc:lxkxxOKKKXKKKkddxkO00KK0Oko'...';;,..;:;cdoccccccccccllllloodddddxxxkkOOk
;;;,;;;;::::;;:;;;;;;::::::cdOOOKXNNXXXXXKKXXXKOkOOkkkxlccccloc,,::lol:cccc::::::::cccccccccclllllll
:;;;;;;::::::::::ccc:::::::cdO0KXNNNXXNNNNNNNk;'....,dOkdooodddl;;lddc:::cc::::::::::::;;;;;;;;;;;;;
;;;;;;::ccccc::::cc::;;;;;:ok0KXNNNNNNXXNNNNXl.      :kOkkkxdddoc;cdxoc::::::;::::cc:cc::ccc::cccccc
,,,,;;;;;;,,;;;;;;;:;;;;;;cdO0KXXXNXXKkdkXNXXO;.    .lkOkolddoddollddoc;;;::;;;;;;;:::::ccc;,,:ccccc
,;;;;:;,,,,,;;;,,,,,,,;;;;cdOKKXXXXKKKKxcoOOOkl.   .;dxko;:loodxddoddlc;;;::::;;;;;::::cllc:::cooddd
,,,,,,,,,,,;;,,,,,,,,,,;;;:dO0KKXXXKK0KKd,cxo;.     .;;,':lllodddooddl:;;:::c:::;;:cccclodxxxkOOOO00
;,,,,,,;;;,,''',,,,,;;,,;;cxO0KKKKXKK00KKd;cdc'.....'. .:ccllodooooodc;;:ccccllllooddxxkO0KKKXXXXXXN
;;;;;;;;:;;,,,;;;;,,;;,;;;lxOO0KKXKKKKKKK0xooc:c::;;,',:ccclooooooooo:':dkkOOO000KKXXXXXNNXK00KKKXXX
llcclllcc::::;::;;:::;,,,;lxkkO0KKKKXXXXXKKOlc::,'',:lc:cclloooollldo:,:dO0KKK00000000000OOkkkkkO00O
:::cllccc:cclllccllooolccldxxkOO0KKXXXXXXXXKxc;,'',;clccllloooooollll:,,:odddddddddddxxxdddxxxxxxxxx
::loddddddxxkkkkO00OO0O00KKOxxxkO0XXXXXXXXXXK0xdoooolccllloooooolllc:,'.,:lllllloooooooooooooooooooo
lloxxxkkkkkkOO000000KXXNNWWXOxdxkO0KKXKKKKXKKKOkxddolllloooooollcc;'....':loooooodddxxdddddddddddddd
kkO000KXXXXXNNNNNNNNNNWWWWWN0xooodkO0KK000KKKK00Oxxdooooooooolc::,......'cxOOOOOOO0000000OOOOOkkxxdd
0KKKKKNNWWWWWWWWWWWWWWWWWWWNKxoolodxk0000000000Okkxxxddddddoc;,'........':xKXNNNXXXXKKKKKK000OOkxxdx
WWWWWWWWWWWWWWWWWWWWWWWWWWWNKkddoddxk0000000OkkkOkkkxxxxxddl:'..........,;lkKXNNXXXXXKKKKKKKK00OOOOO
WWWWWWWWWWWWWWWWMMMMMMWWWWWN0kxddxxxk0K0000OOkkOOOOkxxxxxdoc;'..........,;:oOKKKK00KKK00KKK0000OOOOO
WWWWWWWWWWWWWWMMWWMMWMMMWWWX0Okxxdxxk0KK0OOOOOkkkkkkxxxxxdoc;'.'...  ..';::cdOOOOOOOkkkxxxkkxxxddxdd
WWWWWWWWWWWWWWWWWWWWWWWWWWNK0OOkxdxkkO000OO00kxxxkkkxxxxdool:;'..  ....';ccloxxdddddoooloddollllllll
XKKXNNNNNNNNNXXXNNNNNNNXXKKKK00OOkkxkO000OO0Oxxxkxxkxxxxdoooc'.   ....',;ccllcllcllccccllolcccclcccl
0OOOOOO000OOOkkkO0OOOkxxddOKKK00OOkOkookOkOOkkxxkxxxxxdddddl,   ...'',,;:cllcclollc::;;::::;;clc::::
ollooodxxl:lol:cloolccll::xKXKKK000kolokOOOOOkxxxxxxxxdooc,.  ..',,;;::cclllccc:;:c:;;,;::;,;:;',;;;
,,,;::;cc;;:::;;:c::loxOdld0XXXXK00O00kkO000Okxkxxxddodo:.   ',;:ccclccllllll::::;;;clloolcc:;;:cclc
;cc;cooooooocloooddlldxkkddOXNNXXXKKK000KKKK0OOOkddo:,cc'.  'clloooooolooolllccllllododddooloolooool
xkkkxkOOkxdxkO0KKK0kOOOO0Ok0XNNNNNXXXKKXXXK0000OOdol;....  .;odddddddoloooooooddddxkxxxxdlodxxxkkkkk
KKXXKKKXX0KKXNNXKKXXXXXXXXXXNNNNNNNNXXXXXXK0000OOxddo:.     ;oddddoodooooodxkOOOkxxkkkxxxdddxxxxxxkk"#;

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init();
}

fn build_config(args: &Args) -> Result<Config> {
    let delimiter = build_delimiter(args.delimiter.as_deref())
        .with_context(|| format!("invalid delimiter pattern {:?}", args.delimiter))?;
    let schema = match &args.schema {
        Some(raw) => Some(SchemaSpec::compile(raw)?),
        None => None,
    };
    Ok(Config {
        delimiter,
        mail_domain: args.maildomain.clone(),
        directory_domain: args.ad_domain.clone(),
        schema,
        keep_case: args.keepcase,
        keep_hyphen_first: args.hyphenfn,
        keep_hyphen_last: args.hyphenln,
    })
}

fn verify_inputs(args: &Args) -> Result<()> {
    if !args.infile.exists() {
        bail!("input file not found: {}", args.infile.display());
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);
    match args.color {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        ColorChoice::Auto => {}
    }

    // Easter egg: no file I/O happens on this path.
    if args.schema.as_deref() == Some(SECRET_SCHEMA) {
        println!("Having a ruff day? Here's a corgi\n");
        println!("{}", CORGI_ART);
        return;
    }

    let config = match build_config(&args) {
        Ok(c) => c,
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(2);
        }
    };
    if let Err(e) = verify_inputs(&args) {
        error!("{}", e);
        std::process::exit(2);
    }
    // Create the output file up front so an unwritable path aborts before
    // any processing.
    let outfile = match File::create(&args.outfile) {
        Ok(f) => f,
        Err(e) => {
            error!("cannot create {}: {}", args.outfile.display(), e);
            std::process::exit(2);
        }
    };

    println!("{}", "[+] Parsing input file".green());
    let pairs = match extract_from_path(&args.infile, &config) {
        Ok(p) => p,
        Err(e) => {
            error!("failed to read input: {:#}", e);
            std::process::exit(3);
        }
    };

    let write_res = match args.function {
        OutputMode::GophishCsv => {
            println!("{}", "[+] Selected Gophish CSV output function".green());
            let emails = generate_emails(&pairs, &config);
            write_gophish_csv(&pairs, &emails, outfile)
        }
        OutputMode::Emails => {
            println!("{}", "[+] Selected simple email output function".green());
            let emails = generate_emails(&pairs, &config);
            write_simple_list(&emails, outfile)
        }
        OutputMode::Usernames => {
            println!("{}", "[+] Selected username output function".green());
            let usernames = generate_usernames(&pairs, &config);
            write_simple_list(&usernames, outfile)
        }
    };
    if let Err(e) = write_res {
        error!("failed to write {}: {:#}", args.outfile.display(), e);
        std::process::exit(4);
    }

    println!(
        "{}",
        format!("[+] Output written to {}", args.outfile.display()).green()
    );
}
