//! Built-in template bodies.
//!
//! Every [`TemplateId`] named by the core registry maps here to a static
//! body with `{{VARIABLE}}` placeholders. The catalog is compile-time data:
//! zero allocation, process-wide, read-only.
//!
//! Bodies are deliberately small skeletons — enough for the generated
//! project to boot and be extended, not a finished application. Variant
//! selection (async vs sync, per-auth security modules) happens in the core
//! registry; each body here is written for exactly one variant.

use startfast_core::domain::TemplateId;

/// Look up the builtin body for a template id.
pub fn body(id: TemplateId) -> Option<&'static str> {
    BODIES
        .iter()
        .find(|(name, _)| *name == id.as_str())
        .map(|(_, content)| *content)
}

/// Iterate all builtin template ids (used by integrity tests).
pub fn template_ids() -> impl Iterator<Item = &'static str> {
    BODIES.iter().map(|(name, _)| *name)
}

static BODIES: &[(&str, &str)] = &[
    // ── Application package ──────────────────────────────────────────────────
    ("app/init", "\"\"\"{{PROJECT_NAME}} application package.\"\"\"\n"),
    (
        "app/main_async",
        r#""""Application entry point."""

from fastapi import FastAPI

{{MONITORING_IMPORT}}{{MIDDLEWARE_IMPORT}}from app.api.v1 import router as api_router
from app.core.config import settings

app = FastAPI(title=settings.PROJECT_NAME, version="0.1.0")
app.include_router(api_router, prefix=settings.API_V1_PREFIX)
{{MONITORING_SETUP}}{{MIDDLEWARE_SETUP}}

@app.get("/")
async def root():
    """Service banner."""
    return {"message": "Welcome to {{PROJECT_NAME}}", "docs": "/docs"}
"#,
    ),
    (
        "app/main_sync",
        r#""""Application entry point."""

from fastapi import FastAPI

{{MONITORING_IMPORT}}{{MIDDLEWARE_IMPORT}}from app.api.v1 import router as api_router
from app.core.config import settings

app = FastAPI(title=settings.PROJECT_NAME, version="0.1.0")
app.include_router(api_router, prefix=settings.API_V1_PREFIX)
{{MONITORING_SETUP}}{{MIDDLEWARE_SETUP}}

@app.get("/")
def root():
    """Service banner."""
    return {"message": "Welcome to {{PROJECT_NAME}}", "docs": "/docs"}
"#,
    ),
    // ── API layer ────────────────────────────────────────────────────────────
    ("api/init", "\"\"\"API package.\"\"\"\n"),
    (
        "api/router_plain",
        r#""""API v1 router."""

from .endpoints import router
"#,
    ),
    (
        "api/router_auth",
        r#""""API v1 router."""

from fastapi import APIRouter

from .auth import router as auth_router
from .endpoints import router as endpoints_router

router = APIRouter()
router.include_router(endpoints_router)
router.include_router(auth_router, prefix="/auth", tags=["authentication"])
"#,
    ),
    (
        "api/endpoints",
        r#""""Main API endpoints."""

from fastapi import APIRouter

router = APIRouter()


@router.get("/health")
{{ASYNC_DEF}}def health_check():
    """Health check endpoint."""
    return {"status": "healthy", "service": "{{PROJECT_NAME}}"}
"#,
    ),
    (
        "api/auth_routes_token",
        r#""""Token-based authentication endpoints."""

from fastapi import APIRouter, Depends, HTTPException, status

from app.core.security import authenticate_user, create_access_token, get_current_user
from app.schemas.auth import Token, User, UserLogin

router = APIRouter()


@router.post("/token", response_model=Token)
{{ASYNC_DEF}}def login_for_access_token(credentials: UserLogin):
    """Exchange credentials for an access token."""
    user = {{AWAIT}}authenticate_user(credentials.email, credentials.password)
    if not user:
        raise HTTPException(
            status_code=status.HTTP_401_UNAUTHORIZED,
            detail="Incorrect email or password",
            headers={"WWW-Authenticate": "Bearer"},
        )
    return {"access_token": create_access_token(subject=user.email), "token_type": "bearer"}


@router.get("/me", response_model=User)
{{ASYNC_DEF}}def read_users_me(current_user: User = Depends(get_current_user)):
    """Current user information."""
    return current_user
"#,
    ),
    (
        "api/auth_routes_api_key",
        r#""""API key verification endpoints."""

from fastapi import APIRouter, Depends

from app.core.security import get_api_key

router = APIRouter()


@router.get("/verify")
{{ASYNC_DEF}}def verify_api_key(api_key: str = Depends(get_api_key)):
    """Confirm the presented API key is valid."""
    return {"message": "API key is valid", "api_key": api_key[:8] + "***"}
"#,
    ),
    // ── Core settings and security ───────────────────────────────────────────
    ("core/init", "\"\"\"Core configuration package.\"\"\"\n"),
    (
        "core/config",
        r#""""Application settings."""

from pydantic_settings import BaseSettings


class Settings(BaseSettings):
    PROJECT_NAME: str = "{{PROJECT_NAME}}"
    API_V1_PREFIX: str = "/api/v1"
    DATABASE_URL: str = "{{DATABASE_URL}}"
    SECRET_KEY: str = "change-me"
    ACCESS_TOKEN_EXPIRE_MINUTES: int = {{TOKEN_EXPIRE_MINUTES}}

    class Config:
        env_file = ".env"


settings = Settings()
"#,
    ),
    (
        "core/security_jwt",
        r#""""JWT authentication helpers."""

from datetime import datetime, timedelta, timezone

from fastapi import Depends, HTTPException, status
from fastapi.security import OAuth2PasswordBearer
from jose import JWTError, jwt
from passlib.context import CryptContext

from app.core.config import settings
from app.schemas.auth import User

pwd_context = CryptContext(schemes=["bcrypt"], deprecated="auto")
oauth2_scheme = OAuth2PasswordBearer(tokenUrl="{{API_TOKEN_URL}}")

ALGORITHM = "HS256"


def verify_password(plain: str, hashed: str) -> bool:
    return pwd_context.verify(plain, hashed)


def create_access_token(subject: str) -> str:
    expire = datetime.now(timezone.utc) + timedelta(
        minutes=settings.ACCESS_TOKEN_EXPIRE_MINUTES
    )
    return jwt.encode({"sub": subject, "exp": expire}, settings.SECRET_KEY, algorithm=ALGORITHM)


{{ASYNC_DEF}}def authenticate_user(email: str, password: str):
    """Look up the user and verify the password.

    Wire this to your user store; the scaffold accepts nobody by default.
    """
    return None


{{ASYNC_DEF}}def get_current_user(token: str = Depends(oauth2_scheme)) -> User:
    credentials_error = HTTPException(
        status_code=status.HTTP_401_UNAUTHORIZED,
        detail="Could not validate credentials",
        headers={"WWW-Authenticate": "Bearer"},
    )
    try:
        payload = jwt.decode(token, settings.SECRET_KEY, algorithms=[ALGORITHM])
    except JWTError:
        raise credentials_error
    email = payload.get("sub")
    if email is None:
        raise credentials_error
    return User(email=email)
"#,
    ),
    (
        "core/security_oauth2",
        r#""""OAuth2 password-flow helpers."""

from datetime import datetime, timedelta, timezone

from fastapi import Depends, HTTPException, status
from fastapi.security import OAuth2PasswordBearer
from jose import JWTError, jwt
from passlib.context import CryptContext

from app.core.config import settings
from app.schemas.auth import User

pwd_context = CryptContext(schemes=["bcrypt"], deprecated="auto")
oauth2_scheme = OAuth2PasswordBearer(tokenUrl="{{API_TOKEN_URL}}")

ALGORITHM = "HS256"


def verify_password(plain: str, hashed: str) -> bool:
    return pwd_context.verify(plain, hashed)


def create_access_token(subject: str) -> str:
    expire = datetime.now(timezone.utc) + timedelta(
        minutes=settings.ACCESS_TOKEN_EXPIRE_MINUTES
    )
    return jwt.encode({"sub": subject, "exp": expire}, settings.SECRET_KEY, algorithm=ALGORITHM)


{{ASYNC_DEF}}def authenticate_user(username: str, password: str):
    """Validate against your OAuth2 provider or user store."""
    return None


{{ASYNC_DEF}}def get_current_user(token: str = Depends(oauth2_scheme)) -> User:
    try:
        payload = jwt.decode(token, settings.SECRET_KEY, algorithms=[ALGORITHM])
    except JWTError:
        raise HTTPException(
            status_code=status.HTTP_401_UNAUTHORIZED,
            detail="Could not validate credentials",
            headers={"WWW-Authenticate": "Bearer"},
        )
    return User(email=payload.get("sub", ""))
"#,
    ),
    (
        "core/security_api_key",
        r#""""API key authentication."""

from fastapi import HTTPException, Security, status
from fastapi.security import APIKeyHeader

from app.core.config import settings

api_key_header = APIKeyHeader(name="X-API-Key", auto_error=False)


{{ASYNC_DEF}}def get_api_key(api_key: str = Security(api_key_header)) -> str:
    if api_key != settings.SECRET_KEY:
        raise HTTPException(
            status_code=status.HTTP_403_FORBIDDEN,
            detail="Invalid or missing API key",
        )
    return api_key
"#,
    ),
    (
        "core/monitoring",
        r#""""Prometheus metrics wiring."""

from fastapi import FastAPI
from prometheus_fastapi_instrumentator import Instrumentator


def setup_monitoring(app: FastAPI) -> None:
    """Instrument the app and expose /metrics."""
    Instrumentator().instrument(app).expose(app)
"#,
    ),
    (
        "core/logging",
        r#""""Structured logging configuration."""

import logging

import structlog


def configure_logging(level: int = logging.INFO) -> None:
    logging.basicConfig(level=level, format="%(message)s")
    structlog.configure(
        processors=[
            structlog.processors.add_log_level,
            structlog.processors.TimeStamper(fmt="iso"),
            structlog.processors.JSONRenderer(),
        ],
        wrapper_class=structlog.make_filtering_bound_logger(level),
    )
"#,
    ),
    (
        "core/middleware",
        r#""""Custom middleware stack."""

import time

from fastapi import FastAPI, Request


def add_middleware(app: FastAPI) -> None:
    @app.middleware("http")
    async def add_process_time_header(request: Request, call_next):
        start = time.perf_counter()
        response = await call_next(request)
        response.headers["X-Process-Time"] = f"{time.perf_counter() - start:.4f}"
        return response
"#,
    ),
    // ── Persistence ──────────────────────────────────────────────────────────
    ("db/init", "\"\"\"Database package.\"\"\"\n"),
    (
        "db/session_async",
        r#""""Database session management."""

from sqlalchemy.ext.asyncio import AsyncSession, async_sessionmaker, create_async_engine

from app.core.config import settings

engine = create_async_engine(settings.DATABASE_URL, echo=False)
SessionLocal = async_sessionmaker(engine, expire_on_commit=False)


async def get_db():
    async with SessionLocal() as session:
        yield session
"#,
    ),
    (
        "db/session_sync",
        r#""""Database session management."""

from sqlalchemy import create_engine
from sqlalchemy.orm import sessionmaker

from app.core.config import settings

engine = create_engine(settings.DATABASE_URL, echo=False)
SessionLocal = sessionmaker(bind=engine, autoflush=False)


def get_db():
    session = SessionLocal()
    try:
        yield session
    finally:
        session.close()
"#,
    ),
    (
        "db/mongodb_client_async",
        r#""""MongoDB client."""

from motor.motor_asyncio import AsyncIOMotorClient

from app.core.config import settings

client = AsyncIOMotorClient(settings.DATABASE_URL)
db = client.get_default_database()
"#,
    ),
    (
        "db/mongodb_client_sync",
        r#""""MongoDB client."""

from pymongo import MongoClient

from app.core.config import settings

client = MongoClient(settings.DATABASE_URL)
db = client.get_default_database()
"#,
    ),
    (
        "db/redis_client_async",
        r#""""Redis client."""

from redis.asyncio import Redis

from app.core.config import settings

redis_client = Redis.from_url(settings.DATABASE_URL, decode_responses=True)
"#,
    ),
    (
        "db/redis_client_sync",
        r#""""Redis client."""

from redis import Redis

from app.core.config import settings

redis_client = Redis.from_url(settings.DATABASE_URL, decode_responses=True)
"#,
    ),
    ("models/init", "\"\"\"ORM models.\"\"\"\n"),
    (
        "models/base",
        r#""""Declarative base for ORM models."""

from sqlalchemy.orm import DeclarativeBase


class Base(DeclarativeBase):
    pass
"#,
    ),
    (
        "models/auth_user",
        r#""""User account model."""

from sqlalchemy import String
from sqlalchemy.orm import Mapped, mapped_column

from app.models.base import Base


class User(Base):
    __tablename__ = "users"

    id: Mapped[int] = mapped_column(primary_key=True)
    email: Mapped[str] = mapped_column(String(255), unique=True, index=True)
    hashed_password: Mapped[str] = mapped_column(String(255))
    is_active: Mapped[bool] = mapped_column(default=True)
"#,
    ),
    // ── Schemas ──────────────────────────────────────────────────────────────
    ("schemas/init", "\"\"\"Pydantic schemas.\"\"\"\n"),
    (
        "schemas/auth",
        r#""""Authentication schemas."""

from pydantic import BaseModel, EmailStr


class Token(BaseModel):
    access_token: str
    token_type: str = "bearer"


class UserLogin(BaseModel):
    email: EmailStr
    password: str


class User(BaseModel):
    email: EmailStr
    is_active: bool = True
"#,
    ),
    // ── Service layer ────────────────────────────────────────────────────────
    ("services/init", "\"\"\"Service layer.\"\"\"\n"),
    (
        "services/item_async",
        r#""""Item service (CRUD skeleton)."""

_ITEMS: dict[int, dict] = {}


async def list_items() -> list[dict]:
    return list(_ITEMS.values())


async def get_item(item_id: int) -> dict | None:
    return _ITEMS.get(item_id)


async def upsert_item(item_id: int, payload: dict) -> dict:
    _ITEMS[item_id] = {"id": item_id, **payload}
    return _ITEMS[item_id]


async def delete_item(item_id: int) -> bool:
    return _ITEMS.pop(item_id, None) is not None
"#,
    ),
    (
        "services/item_sync",
        r#""""Item service (CRUD skeleton)."""

_ITEMS: dict[int, dict] = {}


def list_items() -> list[dict]:
    return list(_ITEMS.values())


def get_item(item_id: int) -> dict | None:
    return _ITEMS.get(item_id)


def upsert_item(item_id: int, payload: dict) -> dict:
    _ITEMS[item_id] = {"id": item_id, **payload}
    return _ITEMS[item_id]


def delete_item(item_id: int) -> bool:
    return _ITEMS.pop(item_id, None) is not None
"#,
    ),
    (
        "services/prediction",
        r#""""Prediction service."""


{{ASYNC_DEF}}def make_prediction(input_data: dict) -> dict:
    """Run the model on input_data.

    Replace the body with real model loading and inference; the scaffold
    echoes the input back with a neutral score.
    """
    return {"model": "default", "input": input_data, "score": 0.0}
"#,
    ),
    (
        "services/processing",
        r#""""Processing service."""


{{ASYNC_DEF}}def process_data(data: dict) -> dict:
    """Process a payload and report what was done."""
    return {"processed": True, "fields": len(data)}
"#,
    ),
    // ── Background worker ────────────────────────────────────────────────────
    ("worker/init", "\"\"\"Background worker package.\"\"\"\n"),
    (
        "worker/celery_app",
        r#""""Celery application."""

from celery import Celery

celery_app = Celery(
    "{{PROJECT_SLUG}}",
    broker="{{CELERY_BROKER_URL}}",
    backend="{{CELERY_BROKER_URL}}",
)
celery_app.conf.task_routes = {"app.worker.tasks.*": {"queue": "default"}}
"#,
    ),
    (
        "worker/tasks",
        r#""""Background tasks."""

from app.worker.celery_app import celery_app


@celery_app.task
def ping() -> str:
    return "pong"
"#,
    ),
    // ── Project metadata ─────────────────────────────────────────────────────
    (
        "meta/requirements",
        r#"fastapi>=0.110
uvicorn[standard]
pydantic-settings
pydantic[email]
{{REQUIREMENTS_EXTRA}}
"#,
    ),
    (
        "meta/env",
        r#"# Environment for {{PROJECT_NAME}} (copy to .env and edit)
SECRET_KEY=change-me
DATABASE_URL={{DATABASE_URL}}
"#,
    ),
    (
        "meta/gitignore",
        r#"__pycache__/
*.py[cod]
*.egg-info/
.venv/
venv/
.env
.pytest_cache/
*.db
"#,
    ),
    // ── Docker ───────────────────────────────────────────────────────────────
    (
        "docker/dockerfile",
        r#"FROM python:{{PYTHON_TAG}}-slim

WORKDIR /app

COPY requirements.txt .
RUN pip install --no-cache-dir -r requirements.txt

COPY . .

EXPOSE 8000
CMD ["./scripts/start.sh"]
"#,
    ),
    (
        "docker/compose",
        r#"services:
  api:
    build: .
    ports:
      - "8000:8000"
    env_file:
      - .env
{{COMPOSE_DATABASE}}{{COMPOSE_WORKER}}"#,
    ),
    (
        "docker/ignore",
        r#".git
__pycache__/
*.pyc
.venv/
.env
tests/
"#,
    ),
    (
        "docker/start",
        r#"#!/bin/sh
set -e

exec uvicorn app.main:app --host 0.0.0.0 --port 8000
"#,
    ),
    // ── Tests ────────────────────────────────────────────────────────────────
    ("tests/init", "\"\"\"Test suite for {{PROJECT_NAME}}.\"\"\"\n"),
    (
        "tests/conftest",
        r#""""Shared test fixtures."""

import pytest
from fastapi.testclient import TestClient

from app.main import app


@pytest.fixture()
def client() -> TestClient:
    return TestClient(app)
"#,
    ),
    (
        "tests/test_api",
        r#""""API smoke tests."""


def test_root(client):
    response = client.get("/")
    assert response.status_code == 200


def test_health(client):
    response = client.get("/api/v1/health")
    assert response.status_code == 200
    assert response.json()["service"] == "{{PROJECT_NAME}}"
"#,
    ),
    // ── Documentation ────────────────────────────────────────────────────────
    (
        "docs/readme",
        r#"# {{PROJECT_NAME}}

{{PROJECT_SUMMARY}}, generated with startfast.

## Quickstart

```sh
python -m venv .venv && . .venv/bin/activate
pip install -r requirements.txt
uvicorn app.main:app --reload
```

The interactive API docs live at <http://localhost:8000/docs>.

## Layout

- `app/main.py` — FastAPI entry point ({{EXECUTION_MODE}} mode)
- `app/api/v1/` — versioned API routes
- `app/core/` — settings and cross-cutting concerns
"#,
    ),
    (
        "docs/index",
        r#"# {{PROJECT_NAME}} documentation

Start with the [README](../README.md). This directory is the place for
architecture notes, ADRs, and runbooks as the service grows.
"#,
    ),
    // ── Advanced scaffolding ─────────────────────────────────────────────────
    (
        "advanced/makefile",
        "run:\n\tuvicorn app.main:app --reload\n\ntest:\n\tpytest\n\nlint:\n\truff check app tests\n\n.PHONY: run test lint\n",
    ),
    (
        "advanced/precommit",
        r#"repos:
  - repo: https://github.com/astral-sh/ruff-pre-commit
    rev: v0.6.9
    hooks:
      - id: ruff
      - id: ruff-format
"#,
    ),
];

// ── Tests ────────────────────────────────────────────────────────────────────
