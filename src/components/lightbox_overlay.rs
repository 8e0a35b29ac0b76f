use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LightboxOverlayProps {
    #[prop_or(AttrValue::Static("lightbox"))]
    pub overlay_id: AttrValue,
    #[prop_or(AttrValue::Static("lightbox-img"))]
    pub image_id: AttrValue,
    #[prop_or(AttrValue::Static("lightbox-close"))]
    pub close_control_id: AttrValue,
}

/// Static overlay markup. Rendered once, hidden; visibility is driven by the
/// document listeners rather than by Yew state.
#[function_component(LightboxOverlay)]
pub fn lightbox_overlay(props: &LightboxOverlayProps) -> Html {
    html! {
        <div
            id={props.overlay_id.clone()}
            aria-hidden="true"
            role="dialog"
            style="display:none; position:fixed; inset:0; z-index:100; align-items:center; justify-content:center; background:rgba(0,0,0,0.85); cursor:zoom-out;"
        >
            <button
                id={props.close_control_id.clone()}
                aria-label="Close"
                style="position:absolute; top:16px; right:16px; font-size:20px; padding:4px 10px;"
            >{"×"}</button>
            <img
                id={props.image_id.clone()}
                alt=""
                style="max-width:92vw; max-height:92vh; box-shadow:0 6px 18px rgba(0,0,0,0.6);"
            />
        </div>
    }
}
