use career_advisor_ui::App;
use leptos::prelude::*;

fn main() {
	career_advisor_ui::init_logging();
	mount_to_body(App);
}
