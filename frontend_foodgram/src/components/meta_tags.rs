// frontend_foodgram/src/components/meta_tags.rs
use gloo::console::{error, log};
use yew::prelude::*;

use crate::head::{self, DomHead, PageMeta};

#[derive(Properties, PartialEq)]
pub struct MetaTagsProps {
    pub meta: PageMeta,
}

/// Publishes `meta` to the document head while mounted and puts the
/// previous head back on unmount. Renders nothing into the body.
#[function_component(MetaTags)]
pub fn meta_tags(props: &MetaTagsProps) -> Html {
    use_effect_with(props.meta.clone(), |meta| {
        let applied = DomHead::new().and_then(|mut dom| {
            let snapshot = head::apply(&mut dom, meta)?;
            Ok((dom, snapshot))
        });

        let applied = match applied {
            Ok(applied) => {
                log!("Page metadata applied:", meta.title);
                Some(applied)
            }
            Err(err) => {
                error!(format!("Failed to apply page metadata: {}", err));
                None
            }
        };

        move || {
            if let Some((mut dom, snapshot)) = applied {
                if let Err(err) = head::restore(&mut dom, &snapshot) {
                    error!(format!("Failed to restore page metadata: {}", err));
                }
            }
        }
    });

    html! {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[function_component(WithMeta)]
    fn with_meta() -> Html {
        let meta = PageMeta {
            title: "Title",
            description: "Description",
            og_title: "Title",
        };
        html! {
            <div>
                <MetaTags {meta} />
                <span>{ "body" }</span>
            </div>
        }
    }

    #[tokio::test]
    async fn leaves_body_untouched() {
        let rendered = ServerRenderer::<WithMeta>::new()
            .hydratable(false)
            .render()
            .await;
        assert_eq!(rendered, "<div><span>body</span></div>");
    }
}
