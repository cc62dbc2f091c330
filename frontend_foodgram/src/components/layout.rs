// frontend_foodgram/src/components/layout.rs
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub children: Children,
}

/// Page chrome wrapping every routed page.
#[function_component(Main)]
pub fn main_layout(props: &LayoutProps) -> Html {
    html! {
        <main class="main">
            { for props.children.iter() }
        </main>
    }
}

#[function_component(Container)]
pub fn container(props: &LayoutProps) -> Html {
    html! {
        <div class="container">
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[function_component(Nested)]
    fn nested() -> Html {
        html! {
            <Main>
                <Container>
                    <p>{ "inside" }</p>
                </Container>
            </Main>
        }
    }

    #[function_component(Empty)]
    fn empty() -> Html {
        html! { <Main /> }
    }

    #[tokio::test]
    async fn wrappers_nest_children() {
        let rendered = ServerRenderer::<Nested>::new()
            .hydratable(false)
            .render()
            .await;
        assert_eq!(
            rendered,
            r#"<main class="main"><div class="container"><p>inside</p></div></main>"#
        );
    }

    #[tokio::test]
    async fn main_without_children_renders_empty_chrome() {
        let rendered = ServerRenderer::<Empty>::new()
            .hydratable(false)
            .render()
            .await;
        assert_eq!(rendered, r#"<main class="main"></main>"#);
    }
}
