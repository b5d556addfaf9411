//! Check command implementation
//!
//! Verifies the generators against known output sequences and reports the
//! hardware entropy backend.

use tracing::{info, warn};

use scipack_random::{construct, GeneratorKind, HardwareEntropy, ResultCode};

use crate::{CliError, Result};

/// First two outputs of each kind for seed 1.
const KNOWN_ANSWERS: [(GeneratorKind, [u64; 2]); 2] = [
    (
        GeneratorKind::Pcg64i,
        [0x575c_9ef2_b858_0b68, 0x010f_7513_6ca3_8d96],
    ),
    (
        GeneratorKind::Xorshift64,
        [0x3a91_87d9_dd0a_caae, 0xd87e_83af_1c21_b4bb],
    ),
];

/// Compares each kind against its known-answer vector
pub fn verify_known_answers() -> Result<()> {
    for (kind, expected) in KNOWN_ANSWERS {
        let mut rng = construct(kind, 1)?;
        let actual = [rng.next_u64(), rng.next_u64()];
        if actual != expected {
            return Err(CliError::CheckFailed(format!(
                "{} produced {:#018x?}, expected {:#018x?}",
                kind, actual, expected
            )));
        }
        info!(generator = %kind, "Known answers match");
    }
    Ok(())
}

/// Run the check command
pub fn run() -> Result<()> {
    info!("Checking system configuration...");

    let entropy = HardwareEntropy::new();
    println!("Entropy backend: {}", entropy.backend_name());

    for kind in GeneratorKind::ALL {
        println!(
            "  {:<12} id={:#x} state_words={}",
            kind.name(),
            kind.identifier(),
            kind.state_words()
        );
    }

    verify_known_answers()?;
    println!("Known-answer vectors: ok");

    for kind in GeneratorKind::ALL {
        let outcome = construct(kind, 0);
        let code = ResultCode::of(&outcome);
        if code == ResultCode::Success {
            println!("Hardware seeding ({}): ok", kind);
        } else {
            warn!(generator = %kind, "Hardware seeding failed");
            println!("Hardware seeding ({}): {}", kind, code.description());
        }
    }

    info!("System check complete");
    Ok(())
}
