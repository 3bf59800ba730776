//! Photo carousel cycling through the configured gallery.
//!
//! Auto-advances every five seconds; the timer task is scoped to the
//! component and dropped with it.

use dioxus::prelude::*;

/// Props for the photo carousel.
#[derive(Props, Clone, PartialEq)]
pub struct PhotoCarouselProps {
    /// Ordered photo URLs; callers skip rendering when empty
    pub photos: Vec<String>,
}

#[component]
pub fn PhotoCarousel(props: PhotoCarouselProps) -> Element {
    let photos = props.photos.clone();
    let count = photos.len();
    let mut index = use_signal(|| 0usize);

    use_effect(move || {
        spawn(async move {
            loop {
                tokio::time::sleep(std::time::Duration::from_secs(5)).await;
                if count > 0 {
                    index.set((*index.peek() + 1) % count);
                }
            }
        });
    });

    if count == 0 {
        return rsx! {};
    }

    let current = photos[index() % count].clone();

    rsx! {
        div { class: "carousel",
            button {
                class: "carousel-nav",
                onclick: move |_| index.set((*index.peek() + count - 1) % count),
                "<"
            }
            img { class: "carousel-photo", src: "{current}", alt: "Birthday photo" }
            button {
                class: "carousel-nav",
                onclick: move |_| index.set((*index.peek() + 1) % count),
                ">"
            }
        }
    }
}
