use crate::utils::error::Result;
use std::io::Write;

/// Published targets, printed as-is. Nothing here is measured.
pub const PERFORMANCE_CLAIMS: [(&str, &str); 5] = [
    ("Training time (XOR, 1000 epochs)", "< 100ms"),
    ("Inference latency", "< 1ms per prediction"),
    ("Ephemeral agent lifespan", "50-200ms (spawn, solve, dissolve)"),
    ("Forecast latency (5-step horizon)", "< 10ms"),
    ("Memory footprint", "< 50MB per service"),
];

pub fn print_summary<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "📊 Performance Summary")?;
    writeln!(out, "======================")?;
    for (metric, claim) in PERFORMANCE_CLAIMS {
        writeln!(out, "• {}: {}", metric, claim)?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "🌐 Browser demo: build the WASM package with `{}`, then open wasm/index.html.",
        "cd wasm && wasm-pack build --target web"
    )?;
    Ok(())
}
