use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ImageBoxProps {
    pub title: AttrValue,
    pub src: AttrValue,
    /// Full-resolution image shown in the lightbox; falls back to `src`.
    #[prop_or_default]
    pub zoom_src: Option<AttrValue>,
}

#[function_component(ImageBox)]
pub fn image_box(props: &ImageBoxProps) -> Html {
    html! {
        <figure class="imgbox" style="margin:0; display:flex; flex-direction:column; gap:6px; cursor:zoom-in;">
            <img
                class="zoomable"
                src={props.src.clone()}
                data-zoom-src={props.zoom_src.clone()}
                alt={props.title.clone()}
                style="width:100%; aspect-ratio:1; object-fit:cover; border-radius:8px;"
            />
            <figcaption style="font-size:13px; opacity:0.8;">{ props.title.clone() }</figcaption>
        </figure>
    }
}
