// file: src/server/page.rs
// description: single-page chat UI rendered from an HTML template
// reference: placeholder substitution over a static template

use crate::utils::Validator;

const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{title}}</title>
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0-alpha1/dist/css/bootstrap.min.css" rel="stylesheet">
    <style>
        body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; padding-top: 20px; }
        .chat-container { height: 500px; overflow-y: auto; border: 1px solid #ccc; border-radius: 5px; padding: 10px; margin-bottom: 10px; }
        .user-message { background-color: #e6f7ff; padding: 10px; border-radius: 5px; margin-bottom: 10px; max-width: 75%; margin-left: auto; }
        .bot-message { background-color: #f0f0f0; padding: 10px; border-radius: 5px; margin-bottom: 10px; max-width: 75%; white-space: pre-wrap; }
        .sidebar { background-color: #f8f9fa; padding: 20px; border-radius: 5px; }
        .suggestion { cursor: pointer; }
    </style>
</head>
<body>
    <div class="container">
        <div class="row mb-4">
            <div class="col">
                <h1 class="text-center">{{title}}</h1>
                <p class="text-center">Ask questions about small claims court procedures in New York State</p>
            </div>
        </div>
        <div class="row">
            <div class="col-md-8">
                <div class="chat-container" id="chatContainer">
                    <div class="bot-message">Welcome to the {{title}}! How can I assist you today? You can ask me about general small claims court procedures, filing a claim, serving defendants, the trial process, collecting judgments and more.</div>
                </div>
                <div class="input-group mb-3">
                    <input type="text" id="userQuestion" class="form-control" placeholder="Ask a question...">
                    <button class="btn btn-primary" type="button" id="sendButton">Send</button>
                </div>
            </div>
            <div class="col-md-4">
                <div class="sidebar">
                    <h5>Topics</h5>
                    <ul class="list-group">
{{topics}}
                    </ul>
                    <h5 class="mt-4">Common Questions</h5>
                    <ul class="list-group">
{{questions}}
                    </ul>
                </div>
            </div>
        </div>
    </div>
    <script>
        const input = document.getElementById('userQuestion');
        input.addEventListener('keypress', (e) => { if (e.key === 'Enter') askQuestion(); });
        document.getElementById('sendButton').addEventListener('click', askQuestion);
        document.querySelectorAll('.suggestion').forEach((item) => {
            item.addEventListener('click', () => { input.value = item.dataset.text; input.focus(); });
        });

        function addMessage(text, sender) {
            const container = document.getElementById('chatContainer');
            const div = document.createElement('div');
            div.className = sender === 'user' ? 'user-message' : 'bot-message';
            div.textContent = text;
            container.appendChild(div);
            container.scrollTop = container.scrollHeight;
            return div;
        }

        function askQuestion() {
            const question = input.value.trim();
            if (!question) return;
            addMessage(question, 'user');
            input.value = '';
            const loading = addMessage('Searching for information...', 'bot');

            fetch('/api/ask', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify({ question }),
            })
                .then((response) => response.json())
                .then((data) => {
                    loading.remove();
                    addMessage(data.answer || data.error, 'bot');
                })
                .catch(() => {
                    loading.remove();
                    addMessage('Sorry, there was an error processing your question. Please try again.', 'bot');
                });
        }
    </script>
</body>
</html>
"#;

pub const PAGE_TITLE: &str = "NY Small Claims Court Helper";

pub const COMMON_QUESTIONS: &[&str] = &[
    "How do I file a small claims case?",
    "What is the monetary limit for small claims court?",
    "How do I collect a judgment?",
    "What should I do on the day of trial?",
    "How long do I have to file my case?",
];

/// Replaces each `{{key}}` in `template`. Values are inserted verbatim.
fn fill(template: &str, values: &[(&str, String)]) -> String {
    values.iter().fold(template.to_string(), |page, (key, value)| {
        page.replace(&format!("{{{{{}}}}}", key), value)
    })
}

fn suggestion_items(items: &[impl AsRef<str>]) -> String {
    items
        .iter()
        .map(|item| {
            let escaped = Validator::escape_html(item.as_ref());
            format!(
                "                        <li class=\"list-group-item suggestion\" data-text=\"{}\">{}</li>",
                escaped, escaped
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the chat page with the topic sidebar.
pub fn render_index(topics: &[String]) -> String {
    fill(
        INDEX_TEMPLATE,
        &[
            ("title", PAGE_TITLE.to_string()),
            ("topics", suggestion_items(topics)),
            ("questions", suggestion_items(COMMON_QUESTIONS)),
        ],
    )
}
