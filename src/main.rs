use creditgate::config::Config;
use creditgate::models::{ApplicantProfile, Decision, Verdict};
use creditgate::{logging, risk, CreditEvaluator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    logging::init_logging();

    let config = Config::from_env()?;
    let adapter = risk::load_or_degrade(&config.model_path, &config.schema_path);
    let evaluator = CreditEvaluator::new(config.policy, adapter);

    let applicants = [
        ("Prime applicant", ApplicantProfile::from_percent_rate(700, 15.0, 10.5, 12.0)?),
        ("Low FICO", ApplicantProfile::from_percent_rate(600, 15.0, 10.5, 12.0)?),
        ("High DTI", ApplicantProfile::from_percent_rate(700, 30.0, 10.5, 12.0)?),
        ("Fails both rules", ApplicantProfile::from_percent_rate(580, 35.0, 9.8, 18.0)?),
    ];

    for (label, profile) in &applicants {
        println!("{}:", label);
        println!(
            "  FICO {} | DTI {:.1}% | log income {:.1} | rate {:.1}%",
            profile.fico_score(),
            profile.debt_to_income_pct(),
            profile.log_annual_income(),
            profile.interest_rate() * 100.0
        );
        match evaluator.evaluate(profile) {
            Ok(decision) => print_decision(&decision),
            Err(e) => println!("  Error: {} (no decision rendered)", e),
        }
        println!();
    }

    Ok(())
}

fn print_decision(decision: &Decision) {
    let headline = match decision.verdict {
        Verdict::Approved => "CREDIT APPROVED",
        Verdict::ManualReview => "MANUAL REVIEW",
        Verdict::Rejected => "CREDIT DENIED",
    };
    println!("  {}", headline);
    println!("  Default probability: {}", decision.risk_label());
    println!("  Reason: {}", decision.reason);
    println!("  Source: {}", decision.source.as_str());
}
