use clap::{Parser, Subcommand};

mod convert;
mod files;
mod transform;

/// Kyber NTT toolkit: transforms and coefficient file conversion.
#[derive(Parser)]
#[command(name = "ntt-tool")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Forward NTT of 256 coefficients, optionally for a second operand in the same run.
    Ntt {
        /// Input file.
        #[arg(short, long, default_value = "input_f.txt")]
        input: String,
        /// Output file [default: output_ntt_f.txt, or output_ntt_f_v3.txt with --trace].
        #[arg(short, long)]
        output: Option<String>,
        /// Second input file.
        #[arg(short = 'g', long)]
        input_g: Option<String>,
        /// Output file for the second input [default: output_ntt_g.txt, or output_ntt_g_v3.txt
        /// with --trace].
        #[arg(long)]
        output_g: Option<String>,
        /// Annotate each value with the twiddle factor of its last butterfly.
        #[arg(long)]
        trace: bool,
    },
    /// Inverse NTT of 256 NTT-domain values.
    Intt {
        /// Input file.
        #[arg(short, long, default_value = "input_hat.txt")]
        input: String,
        /// Output file.
        #[arg(short, long, default_value = "output_intt.txt")]
        output: String,
    },
    /// Pointwise product of two NTT-domain vectors (MultiplyNTTs).
    Mul {
        /// First operand, in the NTT domain.
        #[arg(short, long, default_value = "input_f_hat.txt")]
        f: String,
        /// Second operand, in the NTT domain.
        #[arg(short, long, default_value = "input_g_hat.txt")]
        g: String,
        /// Output file.
        #[arg(short, long, default_value = "output_h_hat.txt")]
        output: String,
    },
    /// Product of two polynomials in Z_q[X]/(X^256 + 1), computed through the NTT.
    PolyMul {
        /// First operand.
        #[arg(short, long, default_value = "input_f.txt")]
        f: String,
        /// Second operand.
        #[arg(short, long, default_value = "input_g.txt")]
        g: String,
        /// Output file.
        #[arg(short, long, default_value = "output_h.txt")]
        output: String,
    },
    /// Convert decimal integers to 16-bit hex, one per line.
    Dec2hex {
        /// Input file.
        #[arg(short, long, default_value = "decimal.txt")]
        input: String,
        /// Output file.
        #[arg(short, long, default_value = "outhex.txt")]
        output: String,
    },
    /// Convert hex integers to decimal modulo 2^16, one per line.
    Hex2dec {
        /// Input file.
        #[arg(short, long, default_value = "hex.txt")]
        input: String,
        /// Output file.
        #[arg(short, long, default_value = "outdec.txt")]
        output: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Ntt {
            input,
            output,
            input_g,
            output_g,
            trace,
        } => {
            let output = output
                .clone()
                .unwrap_or_else(|| transform::ntt_output_path("f", *trace));
            transform::ntt(input, &output, *trace).and_then(|()| match input_g {
                Some(g) => {
                    let output_g = output_g
                        .clone()
                        .unwrap_or_else(|| transform::ntt_output_path("g", *trace));
                    transform::ntt(g, &output_g, *trace)
                }
                None => Ok(()),
            })
        }
        Commands::Intt { input, output } => transform::intt(input, output),
        Commands::Mul { f, g, output } => transform::mul(f, g, output),
        Commands::PolyMul { f, g, output } => transform::poly_mul(f, g, output),
        Commands::Dec2hex { input, output } => convert::dec2hex(input, output),
        Commands::Hex2dec { input, output } => convert::hex2dec(input, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
