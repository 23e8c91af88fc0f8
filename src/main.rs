use clap::Parser;
use exam_prep_engine::{
    app_state::AppState,
    config::Config,
    errors::AppResult,
    models::{
        domain::{Difficulty, ExamFamily, ExamStage},
        dto::MockTestRequest,
    },
    services::CancelToken,
};

#[derive(Debug, Parser)]
#[command(name = "exam-prep")]
#[command(about = "Assemble a full-length mock test for a competitive exam")]
struct Cli {
    /// tnpsc, bank, railway or ssc
    family: ExamFamily,
    /// prelims, mains, cbt1, cbt2, tier1 or tier2
    stage: ExamStage,
    #[arg(long, default_value = "mixed")]
    difficulty: Difficulty,
    /// Exam label used in prompts, e.g. "IBPS PO". Defaults to the family name.
    #[arg(long)]
    variant: Option<String>,
}

impl Cli {
    fn into_request(self) -> MockTestRequest {
        let variant = self.variant.unwrap_or_else(|| self.family.to_string());
        MockTestRequest::new(self.family, variant, self.stage).with_difficulty(self.difficulty)
    }
}

#[tokio::main]
async fn main() -> AppResult<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let request = Cli::parse().into_request();
    let state = AppState::new(Config::from_env())?;

    let cancel = CancelToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("Interrupted, cancelling generation");
            on_interrupt.cancel();
        }
    });

    let progress = |percent: u8| log::info!("Mock test progress: {}%", percent);
    let questions = state
        .mock_test_assembler
        .assemble(&request, &progress, Some(&cancel))
        .await?;

    let output = serde_json::to_string_pretty(&questions)?;
    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_defaults_to_mixed_and_variant_to_family() {
        let request = Cli::try_parse_from(["exam-prep", "bank", "prelims"])
            .expect("valid arguments")
            .into_request();

        assert_eq!(request.family, ExamFamily::Bank);
        assert_eq!(request.stage, ExamStage::Prelims);
        assert_eq!(request.difficulty, Difficulty::Mixed);
        assert_eq!(request.variant, "Bank");
    }

    #[test]
    fn named_flags_override_defaults() {
        let request = Cli::try_parse_from([
            "exam-prep",
            "ssc",
            "tier1",
            "--difficulty",
            "hard",
            "--variant",
            "SSC CGL",
        ])
        .expect("valid arguments")
        .into_request();

        assert_eq!(request.difficulty, Difficulty::Hard);
        assert_eq!(request.variant, "SSC CGL");
    }

    #[test]
    fn unknown_family_is_rejected() {
        assert!(Cli::try_parse_from(["exam-prep", "upsc", "prelims"]).is_err());
    }
}
