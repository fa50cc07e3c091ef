use leptos::prelude::*;

/// Muted, looping, autoplaying inline video filling its parent
#[component]
pub fn BackgroundVideo(
    src: &'static str,
    #[prop(into, default = "w-full h-full object-cover".into())] class: String,
) -> impl IntoView {
    // markup form keeps `muted` as an attribute, which autoplay requires
    let markup = format!(
        r#"<video autoplay muted loop playsinline class="{class}"><source src="{src}" type="video/mp4" />Your browser does not support the video tag.</video>"#
    );

    view! { <div class="w-full h-full" inner_html=markup></div> }
}
