use clap::Parser;
use comfort_toolbox::{app, config, i18n};

/// 명령행 옵션.
#[derive(Debug, Parser)]
#[command(name = "comfort_toolbox", about = "Thermal comfort toolbox (PMV/PPD)")]
struct Cli {
    /// 표시 언어 (ko/en/auto)
    #[arg(long, default_value = "auto")]
    lang: String,
    /// 언어팩 디렉터리 경로
    #[arg(long)]
    locales_dir: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    let cli = Cli::parse();
    if let Err(err) = try_run(&cli) {
        eprintln!("오류: {err}");
    }
}

fn try_run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, cfg.language.as_deref());
    let tr = i18n::Translator::new_with_pack(&lang, cli.locales_dir.as_deref());
    app::run(&mut cfg, &tr)?;
    Ok(())
}
