use yew::prelude::*;

const STATUS_LINES: [&str; 3] = [
    "Scanning for threats...",
    "Establishing secure connection...",
    "Activating cyber defense systems...",
];

#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    html! {
        <div class="loading-screen">
            <style>
                {r#"
                    .loading-screen {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(135deg, #0f172a, #1e293b, #0f172a);
                        color: #22d3ee;
                        font-family: monospace;
                    }
                    .loading-ring {
                        width: 128px;
                        height: 128px;
                        border: 4px solid #22d3ee;
                        border-top-color: transparent;
                        border-radius: 50%;
                        animation: spin 2s linear infinite;
                        margin-bottom: 2rem;
                    }
                    @keyframes spin {
                        to { transform: rotate(360deg); }
                    }
                    .loading-title {
                        font-size: 2rem;
                        margin-bottom: 1rem;
                    }
                "#}
            </style>
            <div class="loading-ring"></div>
            <h1 class="loading-title">{"INITIALIZING SECURITY PROTOCOLS"}</h1>
            {
                for STATUS_LINES
                    .iter()
                    .map(|line| html! { <div class="loading-status">{*line}</div> })
            }
        </div>
    }
}
