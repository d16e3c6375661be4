fn main() -> anyhow::Result<()> {
    report_form_app::platform::run_app()
}
