use gpui::*;
use gpui_component::{Root, TitleBar};

use gpui_arbor_story::gallery::StoryGallery;
use gpui_arbor_story::{app_menus, themes};

fn main() {
    let app = Application::new();

    app.run(move |cx| {
        gpui_component::init(cx);
        themes::init(cx);
        cx.activate(true);

        cx.spawn(async move |cx| {
            cx.open_window(
                WindowOptions {
                    titlebar: Some(TitleBar::title_bar_options()),
                    ..Default::default()
                },
                |window, cx| {
                    window.set_window_title("Arbor Components");
                    let app_menu_bar = app_menus::init("Arbor", window, cx);
                    let view = StoryGallery::view(app_menu_bar, window, cx);
                    cx.new(|cx| Root::new(view, window, cx))
                },
            )?;

            Ok::<_, anyhow::Error>(())
        })
        .detach();
    });
}
