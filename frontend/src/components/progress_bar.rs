use yew::prelude::*;

use crate::hooks::use_scroll_progress;

#[function_component(ScrollProgressBar)]
pub fn scroll_progress_bar() -> Html {
    let percent = use_scroll_progress();

    html! {
        <div class="scroll-progress" role="progressbar"
            aria-valuemin="0" aria-valuemax="100" aria-valuenow={format!("{:.0}", percent)}>
            <div class="scroll-progress-fill" style={format!("width: {}%;", percent)}></div>
            <style>
                {r#"
                .scroll-progress {
                    position: absolute;
                    left: 0;
                    bottom: 0;
                    width: 100%;
                    height: 3px;
                    background: transparent;
                }
                .scroll-progress-fill {
                    height: 100%;
                    background: linear-gradient(90deg, #7c3aed, #ec4899);
                    transition: width 80ms linear;
                }
                "#}
            </style>
        </div>
    }
}
