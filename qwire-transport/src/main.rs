use qwire_transport::app::run;

fn main() -> color_eyre::Result<()> {
    run()
}
