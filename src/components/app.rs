use super::{image_box::ImageBox, lightbox_overlay::LightboxOverlay};
use crate::listeners::LightboxListeners;
use yew::prelude::*;

struct Product {
    title: &'static str,
    thumb: &'static str,
    full: Option<&'static str>,
}

const PRODUCTS: &[Product] = &[
    Product { title: "Mate de calabaza", thumb: "/img/mate-small.jpg", full: Some("/img/mate-large.jpg") },
    Product { title: "Bombilla de alpaca", thumb: "/img/bombilla-small.jpg", full: Some("/img/bombilla-large.jpg") },
    Product { title: "Yerbera", thumb: "/img/yerbera.jpg", full: None },
];

#[function_component(App)]
pub fn app() -> Html {
    // Attach the document listeners once the overlay markup is in the page.
    use_effect_with((), move |_| {
        let listeners = web_sys::window()
            .and_then(|win| win.document())
            .map(|doc| LightboxListeners::install_from_page(&doc));
        move || {
            if let Some(listeners) = listeners {
                listeners.detach();
            }
        }
    });

    let cards = PRODUCTS.iter().map(|p| {
        html! {
            <ImageBox
                title={p.title}
                src={p.thumb}
                zoom_src={p.full.map(AttrValue::Static)}
            />
        }
    });

    html! {
        <>
            <main style="max-width:960px; margin:0 auto; padding:24px; display:grid; grid-template-columns:repeat(auto-fill, minmax(200px, 1fr)); gap:20px;">
                { for cards }
            </main>
            <LightboxOverlay />
        </>
    }
}
