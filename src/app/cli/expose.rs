//! `expose-build-vars` arguments.

use clap::Args;
use clap::builder::BoolishValueParser;

use crate::app::config::ExposeInputs;

#[derive(Args, Debug)]
pub struct ExposeArgs {
    /// Path to the last_build.env written by the Habitat build step
    #[arg(long, env = "INPUT_HABITATLASTBUILDENVPATH")]
    pub last_build_env_path: Option<String>,
    /// Set the build number to <pkg_version>-<pkg_release>
    #[arg(long, env = "INPUT_HABITATSETBUILDNUMBER", value_parser = BoolishValueParser::new())]
    pub set_build_number: bool,
    /// Render the image names template to a file
    #[arg(long, env = "INPUT_HABITATSETIMAGENAMES", value_parser = BoolishValueParser::new())]
    pub set_image_names: bool,
    /// Image names template; $VAR tokens are expanded
    #[arg(long, env = "INPUT_HABITATIMAGENAMES")]
    pub image_names: Option<String>,
    /// File the expanded image names are written to
    #[arg(long, env = "INPUT_HABITATIMAGENAMESFILENAME")]
    pub image_names_filename: Option<String>,
}

impl From<ExposeArgs> for ExposeInputs {
    fn from(args: ExposeArgs) -> Self {
        ExposeInputs {
            last_build_env_path: args.last_build_env_path,
            set_build_number: args.set_build_number,
            set_image_names: args.set_image_names,
            image_names: args.image_names,
            image_names_filename: args.image_names_filename,
        }
    }
}
